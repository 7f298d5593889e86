//! Regression model artifact loading

mod accessor;
mod artifact;

pub use accessor::JsonModelAccessor;
pub use artifact::{PolynomialRegression, POLYNOMIAL_REGRESSION_KIND, SUPPORTED_FORMAT_VERSION};
