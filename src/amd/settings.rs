use super::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control parameters for the ordering.
///
/// __Example usage__ :
/// ```no_run
/// use amdorder::amd::AmdSettingsBuilder;
///
/// let settings = AmdSettingsBuilder::default()
///     .dense(1.5)
///     .aggressive(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AmdSettings {
    /// dense row multiplier.  A row of degree greater than
    /// `max(16, dense * sqrt(n))` is ordered last.  Negative
    /// values disable dense row detection.
    #[builder(default = "10.0")]
    pub dense: f64,

    /// aggressive absorption of elements
    #[builder(default = "true")]
    pub aggressive: bool,

    /// return an n x n permutation matrix instead of an index vector
    #[builder(default = "false")]
    pub dense_permutation: bool,

    /// verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for AmdSettings {
    fn default() -> AmdSettings {
        AmdSettingsBuilder::default().build().unwrap()
    }
}

impl AmdSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_dense(self.dense)
    }
}

impl From<SettingsError> for AmdSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        AmdSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl AmdSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(dense) = self.dense {
            validate_dense(dense)?;
        }
        Ok(())
    }
}

fn validate_dense(dense: f64) -> Result<(), SettingsError> {
    if dense.is_nan() {
        Err(SettingsError::BadFieldValue("dense"))
    } else {
        Ok(())
    }
}

#[test]
fn test_settings_defaults() {
    let settings = AmdSettings::default();
    assert_eq!(settings.dense, 10.0);
    assert!(settings.aggressive);
    assert!(!settings.dense_permutation);
    assert!(!settings.verbose);
}

#[test]
fn test_settings_validate() {
    assert!(AmdSettingsBuilder::default()
        .dense(f64::NAN)
        .build()
        .is_err());

    // negative and infinite multipliers are meaningful
    assert!(AmdSettingsBuilder::default().dense(-1.0).build().is_ok());
    assert!(AmdSettingsBuilder::default()
        .dense(f64::INFINITY)
        .build()
        .is_ok());

    let mut settings = AmdSettings::default();
    settings.dense = f64::NAN;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("dense"))
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    let settings: AmdSettings = serde_json::from_str(r#"{"aggressive": false}"#).unwrap();
    assert!(!settings.aggressive);
    assert_eq!(settings.dense, 10.0);

    let text = serde_json::to_string(&settings).unwrap();
    let back: AmdSettings = serde_json::from_str(&text).unwrap();
    assert_eq!(back, settings);
}
