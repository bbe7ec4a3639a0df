mod platform;

use glfw::{Action, Context as _, Key, WindowEvent};
use platform::DesktopPlatformServices;
use redbook_demos::{draw_commands::DrawCommands, legacy_shape::LegacyShape, Demo};
use redbook_gl::GL33;
use redbook_glfw::GlfwSurface;
use redbook_windowing::{GlProfile, WindowDim, WindowOpt};
use std::{error::Error, path::PathBuf, process};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct CLIOpts {
  #[structopt(short, long, default_value = "shaders", parse(from_os_str))]
  /// Directory where to pick shaders from.
  shaders: PathBuf,

  #[structopt(short, long)]
  /// Window title; defaults to the title of the demo.
  title: Option<String>,

  #[structopt(short, long)]
  /// Run fullscreen; restricted to the window size if one is given.
  fullscreen: bool,

  #[structopt(long, requires = "height")]
  /// Window width, in pixels.
  width: Option<u32>,

  #[structopt(long, requires = "width")]
  /// Window height, in pixels.
  height: Option<u32>,

  #[structopt(short, long)]
  /// List available demos.
  list_demos: bool,

  /// Demo to run.
  demo: Option<String>,
}

impl CLIOpts {
  /// Window dimension asked for on the command line.
  fn window_dim(&self) -> WindowDim {
    match (self.fullscreen, self.width.zip(self.height)) {
      (false, None) => *WindowOpt::default().dim(),
      (false, Some((width, height))) => WindowDim::Windowed { width, height },
      (true, None) => WindowDim::Fullscreen,
      (true, Some((width, height))) => WindowDim::FullscreenRestricted { width, height },
    }
  }
}

/// Macro to declaratively add demos.
macro_rules! demos {
  ($($name:literal => $demo:ty),* $(,)?) => {
    fn show_available_demos() {
      println!("available demos:");
      $( println!("  - {}", $name); )*
    }

    // run a demo based on its name
    fn pick_and_run_demo(cli_opts: CLIOpts) {
      let result = match cli_opts.demo.as_deref() {
        $(
          Some($name) => run_demo::<$demo>(&cli_opts),
        )*

        _ => {
          log::error!("no demo found");
          show_available_demos();
          return;
        }
      };

      if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
      }
    }
  }
}

/// What the event loop should do after a window event.
enum LoopAction {
  Resize { width: u32, height: u32 },
  Quit,
}

// Run a demo.
fn run_demo<D>(cli_opts: &CLIOpts) -> Result<(), Box<dyn Error>>
where
  D: Demo<GL33>,
{
  let features = D::features();
  let mut services = DesktopPlatformServices::new(&cli_opts.shaders, &features)?;

  let profile = if features.requires_legacy_context() {
    GlProfile::Compatibility
  } else {
    GlProfile::Core
  };
  let title = cli_opts.title.as_deref().unwrap_or(D::TITLE);

  let win_opt = WindowOpt::default()
    .set_dim(cli_opts.window_dim())
    .set_profile(profile);
  let surface = GlfwSurface::new_gl33(title, win_opt)?;
  let mut context = surface.context;
  let events = surface.events_rx;

  let mut demo = D::initialize(title, &mut services, &mut context)?;

  // the demo only learns about the framebuffer size through resizes
  let [width, height] = context.framebuffer_size();
  demo.resize(width, height, &mut context);

  'app: loop {
    context.window.glfw.poll_events();

    for (_, event) in glfw::flush_messages(&events) {
      match adapt_event(event) {
        Some(LoopAction::Resize { width, height }) => demo.resize(width, height, &mut context),
        Some(LoopAction::Quit) => break 'app,
        None => (),
      }
    }

    demo.display(true, &mut context);
    context.window.swap_buffers();
  }

  demo.finalize(&mut context);
  log::info!("{} finalized", title);

  Ok(())
}

fn adapt_event(event: WindowEvent) -> Option<LoopAction> {
  match event {
    WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Release, _) => {
      Some(LoopAction::Quit)
    }

    WindowEvent::FramebufferSize(width, height) => Some(LoopAction::Resize {
      width: width.max(0) as u32,
      height: height.max(0) as u32,
    }),

    _ => None,
  }
}

demos! {
  "legacy-shape" => LegacyShape,
  "draw-commands" => DrawCommands<GL33>,
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if cli_opts.list_demos {
    show_available_demos();
  } else {
    pick_and_run_demo(cli_opts);
  }
}
