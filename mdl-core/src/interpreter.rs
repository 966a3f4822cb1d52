//! Single pass interpreter over a parsed operation list.
//!
//! Keeps the coordinate system stack, builds each primitive into one
//! reusable geometry buffer, and hands the result to the rasterizer and
//! output collaborators. A failing operation stops the run; whatever was
//! drawn before it stays on the screen.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::geometry::{GeometryBuffer, Primitives, Tessellator};
use crate::lighting::{resolve_constants, Constants};
use crate::op::Operation;
use crate::output::Output;
use crate::raster::Rasterizer;
use crate::screen::Screen;
use crate::symtab::SymbolTable;
use crate::transform::{Axis, Transform, TransformStack};

/// Runs operations against a coordinate stack, a geometry buffer and a screen
pub struct Interpreter<'s, R, O, G = Tessellator> {
    config: RenderConfig,
    symbols: &'s SymbolTable,
    stack: TransformStack,
    buffer: GeometryBuffer,
    screen: Screen,
    rasterizer: R,
    output: O,
    primitives: G,
}

impl<'s, R: Rasterizer, O: Output> Interpreter<'s, R, O> {
    /// Identity stack, empty buffer and a cleared screen sized from `config`
    pub fn new(config: RenderConfig, symbols: &'s SymbolTable, rasterizer: R, output: O) -> Self {
        Self {
            stack: TransformStack::new(),
            buffer: GeometryBuffer::with_capacity(config.buffer_capacity),
            screen: Screen::new(config.width, config.height, config.clear_color),
            config,
            symbols,
            rasterizer,
            output,
            primitives: Tessellator,
        }
    }
}

impl<'s, R, O, G> Interpreter<'s, R, O, G> {
    /// Swap in another primitive generator
    pub fn with_primitives<H: Primitives>(self, primitives: H) -> Interpreter<'s, R, O, H> {
        Interpreter {
            config: self.config,
            symbols: self.symbols,
            stack: self.stack,
            buffer: self.buffer,
            screen: self.screen,
            rasterizer: self.rasterizer,
            output: self.output,
            primitives,
        }
    }

    /// Current coordinate system stack
    pub fn stack(&self) -> &TransformStack {
        &self.stack
    }

    /// Geometry buffer, empty between operations
    pub fn buffer(&self) -> &GeometryBuffer {
        &self.buffer
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn primitives(&self) -> &G {
        &self.primitives
    }

    pub fn into_screen(self) -> Screen {
        self.screen
    }
}

impl<'s, R: Rasterizer, O: Output, G: Primitives> Interpreter<'s, R, O, G> {
    /// Apply every operation in order, stopping at the first failure
    pub fn run(&mut self, operations: &[Operation]) -> Result<()> {
        log::debug!("Symbol table:\n{}", self.symbols);

        for (index, op) in operations.iter().enumerate() {
            log::debug!("{index}: {op}");
            self.step(index, op)?;
        }

        log::info!(
            "Interpreted {} operations, coordinate stack depth {}",
            operations.len(),
            self.stack.depth()
        );
        Ok(())
    }

    fn step(&mut self, index: usize, op: &Operation) -> Result<()> {
        match op {
            Operation::Push => self.stack.push(),
            Operation::Pop => {
                self.stack.pop().ok_or(Error::StackUnderflow { index })?;
            }

            Operation::Move { offset, knob } => {
                log_knob(knob);
                let [x, y, z] = *offset;
                self.stack.compose(&Transform::translation(x, y, z));
            }
            Operation::Scale { factors, knob } => {
                log_knob(knob);
                let [x, y, z] = *factors;
                self.stack.compose(&Transform::scale(x, y, z));
            }
            Operation::Rotate { axis, degrees, knob } => {
                log_knob(knob);
                let theta = Transform::degrees_to_radians(*degrees);
                self.stack.compose(&Transform::rotation(Axis::from_selector(*axis), theta));
            }

            Operation::Box {
                corner,
                size,
                constants,
                coords,
            } => {
                let resolved = self.resolve(index, constants.as_deref())?;
                self.primitives.add_box(&mut self.buffer, *corner, *size);
                self.draw_polygons(index, &resolved, coords.as_deref())?;
            }
            Operation::Sphere {
                center,
                radius,
                constants,
                coords,
            } => {
                let resolved = self.resolve(index, constants.as_deref())?;
                self.primitives
                    .add_sphere(&mut self.buffer, *center, *radius, self.config.step);
                self.draw_polygons(index, &resolved, coords.as_deref())?;
            }
            Operation::Torus {
                center,
                r0,
                r1,
                constants,
                coords,
            } => {
                let resolved = self.resolve(index, constants.as_deref())?;
                self.primitives
                    .add_torus(&mut self.buffer, *center, *r0, *r1, self.config.step);
                self.draw_polygons(index, &resolved, coords.as_deref())?;
            }

            Operation::Line {
                p0,
                p1,
                constants,
                cs0,
                cs1,
            } => {
                // Lines always draw in the configured line color
                for (what, name) in [("constants", constants), ("cs0", cs0), ("cs1", cs1)] {
                    if let Some(name) = name {
                        log::debug!("\tline {what} `{name}` not applied");
                    }
                }
                self.primitives.add_edge(&mut self.buffer, *p0, *p1);
                self.buffer.transform(self.stack.peek());
                let drawn = self
                    .rasterizer
                    .draw_lines(&self.buffer, &mut self.screen, self.config.line_color);
                self.buffer.clear();
                drawn.map_err(|source| Error::Render { index, source })?;
            }

            Operation::Save { filename } => {
                log::info!("Saving screen to {filename}");
                self.output
                    .save(&self.screen, filename)
                    .map_err(|source| Error::Render { index, source })?;
            }
            Operation::Display => {
                log::info!("Displaying screen");
                self.output
                    .display(&self.screen)
                    .map_err(|source| Error::Render { index, source })?;
            }

            // Lighting, camera, animation and mesh loading are recognized
            // but leave the stack, buffer and screen alone.
            Operation::Mesh { .. }
            | Operation::Light { .. }
            | Operation::Ambient { .. }
            | Operation::Camera { .. }
            | Operation::Constants { .. }
            | Operation::SaveCoords { .. }
            | Operation::SaveKnobs { .. }
            | Operation::Basename { .. }
            | Operation::Tween { .. }
            | Operation::Frames { .. }
            | Operation::Vary { .. }
            | Operation::Set { .. }
            | Operation::Shading { .. }
            | Operation::SetKnobs { .. }
            | Operation::Focal { .. }
            | Operation::GenerateRayfiles => {
                log::debug!("\t{op} has no effect on rendering");
            }
        }
        Ok(())
    }

    /// Named constants, or the configured default when no name is given
    fn resolve(&self, index: usize, name: Option<&str>) -> Result<Constants> {
        let named = match name {
            Some(name) => {
                let constants = self.symbols.constants(name).ok_or_else(|| Error::UndefinedConstants {
                    index,
                    name: name.to_string(),
                })?;
                log::debug!("\tconstants: {name}");
                Some(constants)
            }
            None => None,
        };
        Ok(*resolve_constants(named, &self.config.default_constants))
    }

    /// Move the buffered solid into the current coordinate system, draw it,
    /// and empty the buffer whether or not the draw succeeded.
    fn draw_polygons(&mut self, index: usize, constants: &Constants, coords: Option<&str>) -> Result<()> {
        if let Some(coords) = coords {
            log::debug!("\tcs: {coords} not applied");
        }
        self.buffer.transform(self.stack.peek());
        let drawn = self.rasterizer.draw_polygons(
            &self.buffer,
            &mut self.screen,
            &self.config.lighting,
            constants.color,
            constants,
        );
        self.buffer.clear();
        drawn.map_err(|source| Error::Render { index, source })
    }
}

fn log_knob(knob: &Option<String>) {
    if let Some(knob) = knob {
        log::debug!("\tknob: {knob} not applied");
    }
}
