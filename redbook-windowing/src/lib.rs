//! # redbook windowing
//!
//! This is the base, abstract crate for windowing common types in redbook. The `redbook` crate
//! provides you with abstracting over OpenGL, but it doesn’t give you a way to create an OpenGL
//! context. This is due to the fact that creating and managing OpenGL contexts is tightly related
//! to the type of application you target. `redbook-glfw` solves that problem for desktop
//! applications; other surface crates would share the types defined here.
//!
//! # What’s included
//!
//! - [`WindowDim`]: abstraction over the dimension of a window and its mode (windowed, fullscreen,
//!   fullscreen restricted).
//! - [`GlProfile`]: which flavor of OpenGL context to ask for.
//! - [`WindowOpt`]: an opaque type giving access to hints to customize the window integration.

#![deny(missing_docs)]

/// Dimension metrics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Fullscreen mode (adapt to your screen).
  Fullscreen,
  /// Fullscreen mode with restricted viewport dimension.
  FullscreenRestricted {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
}

/// OpenGL context profile.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GlProfile {
  /// Core profile: no deprecated functionality.
  Core,
  /// Compatibility profile: deprecated functionality (immediate mode, …) is available.
  Compatibility,
}

/// Different window options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowOpt {
  dim: WindowDim,
  num_samples: Option<u32>,
  profile: GlProfile,
}

impl Default for WindowOpt {
  /// Defaults:
  ///
  /// - `dim` set to a 960×540 window.
  /// - `num_samples` set to `None`.
  /// - `profile` set to `GlProfile::Core`.
  fn default() -> Self {
    WindowOpt {
      dim: WindowDim::Windowed {
        width: 960,
        height: 540,
      },
      num_samples: None,
      profile: GlProfile::Core,
    }
  }
}

impl WindowOpt {
  /// Set the dimension of the window.
  #[inline]
  pub fn set_dim(self, dim: WindowDim) -> Self {
    WindowOpt { dim, ..self }
  }

  /// Get the dimension of the window.
  #[inline]
  pub fn dim(&self) -> &WindowDim {
    &self.dim
  }

  /// Set the number of samples to use for multisampling.
  ///
  /// Pass `None` to disable multisampling.
  #[inline]
  pub fn set_num_samples<S>(self, samples: S) -> Self
  where
    S: Into<Option<u32>>,
  {
    WindowOpt {
      num_samples: samples.into(),
      ..self
    }
  }

  /// Get the number of samples to use in multisampling, if any.
  #[inline]
  pub fn num_samples(&self) -> Option<u32> {
    self.num_samples
  }

  /// Set the OpenGL context profile.
  #[inline]
  pub fn set_profile(self, profile: GlProfile) -> Self {
    WindowOpt { profile, ..self }
  }

  /// Get the OpenGL context profile.
  #[inline]
  pub fn profile(&self) -> GlProfile {
    self.profile
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let opt = WindowOpt::default();

    assert_eq!(
      *opt.dim(),
      WindowDim::Windowed {
        width: 960,
        height: 540
      }
    );
    assert_eq!(opt.num_samples(), None);
    assert_eq!(opt.profile(), GlProfile::Core);
  }

  #[test]
  fn builder_keeps_other_fields() {
    let opt = WindowOpt::default()
      .set_num_samples(4)
      .set_profile(GlProfile::Compatibility);

    assert_eq!(opt.num_samples(), Some(4));
    assert_eq!(opt.profile(), GlProfile::Compatibility);
    assert_eq!(*opt.dim(), *WindowOpt::default().dim());
  }
}
