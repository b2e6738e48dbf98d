use crate::ast::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
}

/// Flat, append-only name bindings shared by the whole program.
///
/// There is no block scoping. Re-declaring a name appends a second entry,
/// but lookups return the earliest one.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A table seeded with the built-in type names.
    pub fn new() -> Self {
        let mut table = SymbolTable::empty();
        table.bind("integer", Type::Int);
        table.bind("float", Type::Float);
        table.bind("bool", Type::Bool);
        table
    }

    pub fn empty() -> Self {
        SymbolTable { entries: vec![] }
    }

    pub fn bind(&mut self, name: impl Into<String>, ty: Type) {
        self.entries.push(Symbol {
            name: name.into(),
            ty,
        });
    }

    /// First match in insertion order.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.entries
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| &symbol.ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
