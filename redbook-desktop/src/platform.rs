//! Platform services implementation.

use redbook_demos::{Features, PlatformServices};
use std::{
  collections::HashMap,
  error::Error,
  fmt, fs, io,
  path::{Path, PathBuf},
};

/// Desktop implementation of the [`PlatformServices`] API.
///
/// Every shader a demo declares is read from the shader root when the services are created.
#[derive(Debug)]
pub struct DesktopPlatformServices {
  shaders: HashMap<String, String>,
}

impl DesktopPlatformServices {
  pub fn new(shader_root: &Path, features: &Features) -> Result<Self, DesktopFetchError> {
    let shaders = features
      .shaders()
      .iter()
      .map(|name| {
        let path = shader_root.join(name);
        log::debug!("loading shader {}", path.display());

        fs::read_to_string(&path)
          .map(|source| (name.clone(), source))
          .map_err(|source| DesktopFetchError::Io { path, source })
      })
      .collect::<Result<_, DesktopFetchError>>()?;

    Ok(Self { shaders })
  }
}

#[derive(Debug)]
pub enum DesktopFetchError {
  UnknownShader(String),
  Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DesktopFetchError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      DesktopFetchError::UnknownShader(ref name) => write!(f, "unknown shader to load: {}", name),
      DesktopFetchError::Io { ref path, ref source } => {
        write!(f, "cannot read shader {}: {}", path.display(), source)
      }
    }
  }
}

impl Error for DesktopFetchError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      DesktopFetchError::UnknownShader(_) => None,
      DesktopFetchError::Io { source, .. } => Some(source),
    }
  }
}

impl PlatformServices for DesktopPlatformServices {
  type FetchError = DesktopFetchError;

  fn fetch_shader(&mut self, path: &str) -> Result<&str, Self::FetchError> {
    self
      .shaders
      .get(path)
      .map(String::as_str)
      .ok_or_else(|| DesktopFetchError::UnknownShader(path.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_shader() {
    let mut services = DesktopPlatformServices::new(Path::new("."), &Features::default()).unwrap();

    match services.fetch_shader("nope.glsl") {
      Err(DesktopFetchError::UnknownShader(name)) => assert_eq!(name, "nope.glsl"),
      r => panic!("unexpected fetch result: {:?}", r),
    }
  }

  #[test]
  fn missing_shader_file() {
    let features = Features::default().with_shader("does/not/exist.glsl");

    match DesktopPlatformServices::new(Path::new("."), &features) {
      Err(DesktopFetchError::Io { path, .. }) => {
        assert_eq!(path, Path::new("./does/not/exist.glsl"))
      }
      r => panic!("unexpected services: {:?}", r),
    }
  }

  #[test]
  fn shaders_loaded_eagerly() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../shaders");
    let features = Features::default()
      .with_shader("primitive_restart/primitive_restart.vs.glsl")
      .with_shader("primitive_restart/primitive_restart.fs.glsl");
    let mut services = DesktopPlatformServices::new(&root, &features).unwrap();

    let vs = services
      .fetch_shader("primitive_restart/primitive_restart.vs.glsl")
      .unwrap();
    assert!(vs.contains("model_matrix"));
    assert!(vs.contains("projection_matrix"));
  }
}
