//! Run the scene without a browser and write the last frame as SVG.

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
    headless::main()
}

#[cfg(target_family = "wasm")]
fn main() {}

#[cfg(not(target_family = "wasm"))]
mod headless {
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::PathBuf;
    use std::rc::Rc;

    use anyhow::{anyhow, Context};
    use clap::Parser;

    use spring_bezier::animation::{self, CancelToken, ManualScheduler};
    use spring_bezier::surface::Recording;
    use spring_bezier::{svg, Pointer, Scene, SceneConfig, Vec2};

    #[derive(Parser)]
    #[command(version, about = "Run the spring Bézier scene headlessly and print the final frame as SVG.")]
    struct Args {
        #[arg(long, default_value_t = 800.)]
        width: f64,

        #[arg(long, default_value_t = 600.)]
        height: f64,

        #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
        frames: u64,

        /// Pointer position `X,Y` for successive frames. The last one is held.
        /// Defaults to the middle of the surface.
        #[arg(long = "pointer", value_parser = parse_point)]
        pointers: Vec<Vec2>,

        /// JSON scene configuration.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to write the SVG. Defaults to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    }

    fn parse_point(s: &str) -> anyhow::Result<Vec2> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("Expected `X,Y`, got `{s}`."))?;
        Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        let scene = Rc::new(RefCell::new(Scene::new(args.width, args.height, config)));
        let surface = Rc::new(RefCell::new(Recording::new(args.width, args.height)));
        let center = scene.borrow().center();
        let pointer_at = |frame: u64| -> Vec2 {
            let index = usize::try_from(frame).unwrap_or(usize::MAX);
            args.pointers
                .get(index)
                .or(args.pointers.last())
                .copied()
                .unwrap_or(center)
        };

        let pointer = Pointer::new(pointer_at(0));
        let scheduler = ManualScheduler::new();
        let token = CancelToken::new();
        animation::run(
            {
                let scene = scene.clone();
                let surface = surface.clone();
                let pointer = pointer.clone();
                move || {
                    scene
                        .borrow_mut()
                        .frame(pointer.get(), &mut *surface.borrow_mut())
                }
            },
            scheduler.clone(),
            token.clone(),
        );
        for frame in 1..args.frames {
            pointer.set(pointer_at(frame));
            scheduler.pump(1);
        }
        token.cancel();
        scheduler.pump(1);

        {
            let scene = scene.borrow();
            log::info!(
                "Rendered {} frames. P1 at {:?}, P2 at {:?}.",
                args.frames,
                scene.p1().position(),
                scene.p2().position()
            );
        }

        let document = svg::document(surface.borrow().commands());
        match &args.output {
            Some(path) => std::fs::write(path, document)
                .with_context(|| format!("Could not write `{}`.", path.display()))?,
            None => std::io::stdout()
                .write_all(document.as_bytes())
                .context("Could not write to stdout.")?,
        }
        Ok(())
    }

}
