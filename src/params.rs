//! Generation parameters sent alongside the source file

/// Multipart field carrying the source file
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the edge offset
pub const OFFSET_FIELD: &str = "offset";
/// Multipart field carrying the smoothing flag
pub const SMOOTH_FIELD: &str = "smooth";

/// Tuning knobs for the remote cut path generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Distance of the cut path from the traced edges (default: 10)
    pub offset: f64,
    /// Apply curve smoothing to the generated path (default: true)
    pub smooth: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            offset: 10.0,
            smooth: true,
        }
    }
}

impl GenerationParams {
    pub fn new(offset: f64, smooth: bool) -> Self {
        Self { offset, smooth }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Decimal form of the offset; integral values carry no fraction
    ///
    /// Zero is always unsigned and non-finite values use the JavaScript
    /// spellings `Infinity`, `-Infinity` and `NaN`.
    pub fn offset_field(&self) -> String {
        let offset = self.offset;
        if offset.is_nan() {
            "NaN".to_string()
        } else if offset.is_infinite() {
            if offset > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
        } else if offset == 0.0 {
            // -0 and 0 serialize the same
            "0".to_string()
        } else {
            format!("{}", offset)
        }
    }

    pub fn smooth_field(&self) -> &'static str {
        if self.smooth { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.offset_field(), "10");
        assert_eq!(params.smooth_field(), "true");
    }

    #[test]
    fn test_explicit_values() {
        let params = GenerationParams::default()
            .with_offset(25.0)
            .with_smooth(false);
        assert_eq!(params, GenerationParams::new(25.0, false));
        assert_eq!(params.offset_field(), "25");
        assert_eq!(params.smooth_field(), "false");
    }

    #[test]
    fn test_fractional_and_negative_offsets() {
        assert_eq!(GenerationParams::new(2.5, true).offset_field(), "2.5");
        assert_eq!(GenerationParams::new(-3.0, true).offset_field(), "-3");
        assert_eq!(GenerationParams::new(0.0, true).offset_field(), "0");
    }

    #[test]
    fn test_negative_zero_and_non_finite_offsets() {
        assert_eq!(GenerationParams::new(-0.0, true).offset_field(), "0");
        assert_eq!(GenerationParams::new(f64::INFINITY, true).offset_field(), "Infinity");
        assert_eq!(
            GenerationParams::new(f64::NEG_INFINITY, true).offset_field(),
            "-Infinity"
        );
        assert_eq!(GenerationParams::new(f64::NAN, true).offset_field(), "NaN");
    }
}
