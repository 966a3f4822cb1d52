/// Named symbols referenced by operations
use crate::lighting::Constants;
use nalgebra::Matrix4;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Constants(Constants),
    CoordSystem(Matrix4<f64>),
    Value(f64),
}

/// Symbol storage filled in by the script parser
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, symbol: Symbol) {
        self.symbols.insert(name.into(), symbol);
    }

    pub fn add_constants(&mut self, name: impl Into<String>, constants: Constants) {
        self.insert(name, Symbol::Constants(constants));
    }

    /// Constants stored under `name`; `None` if absent or another kind of symbol
    pub fn constants(&self, name: &str) -> Option<&Constants> {
        match self.symbols.get(name) {
            Some(Symbol::Constants(c)) => Some(c),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, symbol) in &self.symbols {
            match symbol {
                Symbol::Constants(c) => writeln!(
                    f,
                    "{name}: constants ambient {:.2} {:.2} {:.2} diffuse {:.2} {:.2} {:.2} specular {:.2} {:.2} {:.2} color {} {} {}",
                    c.ambient.red, c.ambient.green, c.ambient.blue,
                    c.diffuse.red, c.diffuse.green, c.diffuse.blue,
                    c.specular.red, c.specular.green, c.specular.blue,
                    c.color.red, c.color.green, c.color.blue,
                )?,
                Symbol::CoordSystem(_) => writeln!(f, "{name}: coordinate system")?,
                Symbol::Value(v) => writeln!(f, "{name}: {v:.2}")?,
            }
        }
        Ok(())
    }
}
