/// MDL Core Library - Interpreter for parsed scene operations
///
/// This library walks a parsed operation list, keeps the coordinate system
/// stack, tessellates primitives into a reusable buffer, and drives a
/// z-buffered software rasterizer.

pub mod config;
pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod lighting;
pub mod op;
pub mod output;
pub mod raster;
pub mod screen;
pub mod symtab;
pub mod transform;

// Re-export commonly used types
pub use config::RenderConfig;
pub use error::{Error, RenderError, Result};
pub use geometry::{GeometryBuffer, Primitives, Tessellator};
pub use interpreter::Interpreter;
pub use lighting::{Color, Constants, Light, Lighting, Reflection};
pub use op::Operation;
pub use output::{ImageOutput, Output};
pub use raster::{Rasterizer, ScanlineRasterizer};
pub use screen::Screen;
pub use symtab::{Symbol, SymbolTable};
pub use transform::{Axis, Transform, TransformStack};

/// Run `operations` against a fresh screen with the built-in rasterizer
/// and return the finished screen.
pub fn interpret<O: Output>(
    operations: &[Operation],
    symbols: &SymbolTable,
    config: RenderConfig,
    output: O,
) -> Result<Screen> {
    let mut interpreter = Interpreter::new(config, symbols, ScanlineRasterizer, output);
    interpreter.run(operations)?;
    Ok(interpreter.into_screen())
}
