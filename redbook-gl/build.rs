use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::env;
use std::fs::File;
use std::path::Path;

// The compatibility profile exposes both the immediate mode entry points and the 3.x draw
// commands.
fn main() {
  let dest = env::var("OUT_DIR").unwrap();
  let mut output = File::create(&Path::new(&dest).join("gl_bindings.rs")).unwrap();

  Registry::new(Api::Gl, (3, 3), Profile::Compatibility, Fallbacks::All, [])
    .write_bindings(GlobalGenerator, &mut output)
    .unwrap();
}
