/// Terminal host for the MDL interpreter
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use mdl_core::{ImageOutput, Output, RenderConfig, RenderError, Screen};
use std::io::{self, stdout, Write};
use std::path::Path;
use thiserror::Error;

pub mod renderer;
pub mod scene;

pub use renderer::TerminalDisplay;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Interpret(#[from] mdl_core::Error),
}

pub const USAGE: &str = "Usage: mdl-terminal [--headless] [--out FILE]";

/// Command line options
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub headless: bool,
    pub out: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headless: false,
            out: "demo.png".to_string(),
        }
    }
}

impl Options {
    /// Parse arguments, not including the program name
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, AppError> {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => options.headless = true,
                "--out" => {
                    options.out = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("--out needs a filename\n{USAGE}")))?;
                }
                "-h" | "--help" => return Err(AppError::Usage(USAGE.to_string())),
                other => {
                    return Err(AppError::Usage(format!("unknown argument `{other}`\n{USAGE}")));
                }
            }
        }
        Ok(options)
    }
}

/// Saves to image files and shows the screen in the terminal until a key
/// is pressed. Headless, display is skipped.
pub struct TerminalOutput {
    headless: bool,
}

impl TerminalOutput {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }

    fn present(&self, screen: &Screen) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.show_until_key(screen);

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn show_until_key(&self, screen: &Screen) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        // Last line holds the status bar
        let mut display = TerminalDisplay::new(width as usize, height.saturating_sub(1) as usize);
        display.sample(screen);

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
        display.draw(&mut stdout)?;
        queue!(
            stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "MDL | {}x{} | press any key to continue",
                screen.width(),
                screen.height()
            )),
            ResetColor
        )?;
        stdout.flush()?;

        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}

impl Output for TerminalOutput {
    fn save(&mut self, screen: &Screen, filename: &str) -> Result<(), RenderError> {
        if filename.is_empty() {
            return Err(RenderError::EmptyFilename);
        }
        ImageOutput::write(screen, Path::new(filename))?;
        log::info!("Wrote {filename}");
        Ok(())
    }

    fn display(&mut self, screen: &Screen) -> Result<(), RenderError> {
        if self.headless {
            log::info!("Headless, skipping display");
            return Ok(());
        }
        self.present(screen)?;
        Ok(())
    }
}

/// Render the demo scene with the given options
pub fn run(options: &Options) -> Result<Screen, AppError> {
    let (symbols, operations) = scene::demo_scene(&options.out);
    log::info!("Rendering {} operations", operations.len());

    let screen = mdl_core::interpret(
        &operations,
        &symbols,
        RenderConfig::default(),
        TerminalOutput::new(options.headless),
    )?;
    Ok(screen)
}
