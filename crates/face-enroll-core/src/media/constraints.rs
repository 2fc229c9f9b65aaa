/// Camera orientation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Front-facing ("selfie") camera.
    #[default]
    User,
    /// Rear-facing camera.
    Environment,
}

/// Video-only stream request.
///
/// Width and height are preferences: the platform may grant a different
/// resolution, and the still frame is always taken at whatever it granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    /// Preferred frame width in pixels.
    pub width: u32,
    /// Preferred frame height in pixels.
    pub height: u32,
    /// Orientation hint.
    pub facing: FacingMode,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            facing: FacingMode::User,
        }
    }
}
