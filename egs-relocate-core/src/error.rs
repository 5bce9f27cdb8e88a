use thiserror::Error;

/// Errors raised while reading or validating a launcher manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest declares a schema this build has not been checked against
    #[error(
        "unsupported launcher manifest FormatVersion {version} \
         (supported: {supported:?}); check the new \".item\" format and add it to the supported list"
    )]
    UnsupportedVersion { version: i64, supported: &'static [i64] },

    /// The file is not a JSON object with the required location fields
    #[error("malformed launcher manifest: {0}")]
    Malformed(String),
}

impl ManifestError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// True for schema-version rejections, which must halt the whole run.
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }
}
