use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Color;
use log::LevelFilter;

use termesh::config::DEFAULT_GRADIENT;
use termesh::prelude::*;
use termesh::terminal::{self as term, TerminalGuard};
use termesh::typewriter::{self, Line};

/// Spin a triangle mesh as live ASCII art in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// OBJ file to render; the built-in cube is used when omitted
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Edge length of the built-in cube
    #[arg(long, default_value_t = 1.2)]
    size: f32,

    /// Screen width in character cells
    #[arg(long, default_value_t = 80)]
    width: u32,

    /// Screen height in character cells
    #[arg(long, default_value_t = 24)]
    height: u32,

    /// Model-space sampling step of the rasterizer scan
    #[arg(long, default_value_t = 0.02)]
    scan_step: f32,

    /// Delay appended to every frame, in milliseconds
    #[arg(long, default_value_t = 30)]
    delay_ms: u64,

    /// Shading ramp, dimmest to brightest
    #[arg(long, default_value_t = String::from(DEFAULT_GRADIENT))]
    gradient: String,

    /// Rotation per frame in radians, as `x,y,z`
    #[arg(long, default_value = "0.03,0.02,0.01", value_parser = parse_vec3)]
    spin: Vec3,

    /// Model translation applied after rotation, as `x,y,z`
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3)]
    offset: Vec3,

    /// Camera distance along the view axis
    #[arg(long, default_value_t = 5.0)]
    distance: f32,

    /// Light intensity, in gradient levels per unit of diffuse
    #[arg(long, default_value_t = 10)]
    intensity: u32,

    /// Foreground color for the rendered glyphs
    #[arg(long, value_parser = parse_color)]
    color: Option<Color>,

    /// Stop after this many frames instead of running until a key press
    #[arg(long)]
    frames: Option<u64>,

    /// Skip the loading bar and typewriter intro
    #[arg(long)]
    no_intro: bool,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected `x,y,z`, got `{s}`"));
    }
    let component = |i: usize| -> std::result::Result<f32, String> {
        parts[i]
            .trim()
            .parse()
            .map_err(|_| format!("`{}` is not a number", parts[i]))
    };
    Ok(Vec3::new(component(0)?, component(1)?, component(2)?))
}

fn parse_color(name: &str) -> std::result::Result<Color, String> {
    match name.to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "grey" | "gray" => Ok(Color::Grey),
        other => Err(format!("unknown color `{other}`")),
    }
}

const INTRO: &[Line] = &[
    Line::new("termesh", 60, 300),
    Line::new("a triangle mesh, a light, and your terminal", 35, 400),
    Line::new("", 0, 150),
    Line::new("press q to quit", 35, 700),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = RenderConfig {
        width: cli.width,
        height: cli.height,
        gradient: cli.gradient.clone(),
        frame_delay: Duration::from_millis(cli.delay_ms),
        scan_step: cli.scan_step,
        ..RenderConfig::default()
    };

    let mesh = match &cli.obj {
        Some(path) => Mesh::from_obj(path)
            .with_context(|| format!("could not load mesh from {}", path.display()))?,
        None => Mesh::cube(cli.size),
    };
    log::info!("rendering {} triangles", mesh.triangle_count());

    let mut renderer = Renderer::new(config)?;
    renderer.set_mesh(mesh)?;
    renderer.set_light(cli.distance, Vec3::BACK, cli.intensity);
    renderer.set_rotation_rate(cli.spin.x, cli.spin.y, cli.spin.z);
    renderer.set_translation(cli.offset);

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::new()?;

    if !cli.no_intro {
        term::progress_bar(&mut stdout, 24, Duration::from_millis(1200))?;
        typewriter::play(&mut stdout, INTRO)?;
    }

    term::clear_screen(&mut stdout)?;
    if let Some(color) = cli.color {
        term::set_color(&mut stdout, color)?;
    }

    run(&mut renderer, &mut stdout, cli.frames)
}

fn run(renderer: &mut Renderer, out: &mut impl Write, frames: Option<u64>) -> Result<()> {
    let mut rendered: u64 = 0;
    loop {
        renderer.render(out)?;
        rendered += 1;

        if frames.is_some_and(|cap| rendered >= cap) {
            return Ok(());
        }
        if quit_requested()? {
            return Ok(());
        }
    }
}

/// Drains pending key events, reporting whether the user asked to quit.
fn quit_requested() -> Result<bool> {
    while poll(Duration::ZERO)? {
        if let Event::Key(key) = read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
    Ok(false)
}
