//! The binding store: a flat name -> (type, slot) table.
//!
//! Storage is a fixed array of buckets with chaining; the table never
//! resizes.  The bucket index is the string hash folded into range.  Every
//! identifier the parser shifts is registered here with an auto-assigned
//! storage slot; a later declaration rebinds its type.  Slot 0 is never
//! assigned -- it is the scratch slot expression evaluation stores through.

use crate::DataType;
use core::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const DEFAULT_BUCKETS: usize = 1024;

struct Binding {
    name: String,
    ty: DataType,
    slot: u32,
}

pub struct SymbolTable {
    buckets: Vec<Vec<Binding>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::with_buckets(DEFAULT_BUCKETS)
    }

    pub fn with_buckets(buckets: usize) -> SymbolTable {
        assert!(buckets > 0);
        SymbolTable {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
        }
    }

    fn bucket_index(&self, name: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        // fold the hash into the bucket range
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    fn find(&self, name: &str) -> Option<&Binding> {
        self.buckets[self.bucket_index(name)]
            .iter()
            .find(|b| b.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Binding> {
        let index = self.bucket_index(name);
        self.buckets[index].iter_mut().find(|b| b.name == name)
    }

    /// Bind a new name.  Returns false (and changes nothing) if the name is
    /// already bound.
    pub fn insert(&mut self, name: &str, ty: DataType, slot: u32) -> bool {
        if self.find(name).is_some() {
            return false;
        }
        let index = self.bucket_index(name);
        self.buckets[index].push(Binding {
            name: name.to_string(),
            ty,
            slot,
        });
        true
    }

    pub fn lookup(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn lookup_type(&self, name: &str) -> Option<DataType> {
        self.find(name).map(|b| b.ty)
    }

    /// The storage slot bound to `name`.
    pub fn lookup_value(&self, name: &str) -> Option<u32> {
        self.find(name).map(|b| b.slot)
    }

    /// Rebind the type of an existing name.  Returns false if the name is
    /// not bound.
    pub fn rebind_type(&mut self, name: &str, ty: DataType) -> bool {
        match self.find_mut(name) {
            Some(binding) => {
                binding.ty = ty;
                true
            }
            None => false,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

/// Renders the occupied buckets, one per line.  Used from trace logging.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            write!(f, "[{}]", i)?;
            for binding in bucket {
                write!(
                    f,
                    " {}: {:?}, {};",
                    binding.name, binding.ty, binding.slot
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut table = SymbolTable::new();
        assert!(table.insert("X", DataType::Terminal, 1));
        assert!(table.lookup("X"));
        assert!(!table.lookup("Y"));
        assert_eq!(table.lookup_type("X"), Some(DataType::Terminal));
        assert_eq!(table.lookup_value("X"), Some(1));
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut table = SymbolTable::new();
        assert!(table.insert("X", DataType::Int, 1));
        assert!(!table.insert("X", DataType::Char, 2));
        assert_eq!(table.lookup_type("X"), Some(DataType::Int));
        assert_eq!(table.lookup_value("X"), Some(1));
    }

    #[test]
    fn missing_lookups_fail() {
        let mut table = SymbolTable::new();
        assert_eq!(table.lookup_type("NOPE"), None);
        assert_eq!(table.lookup_value("NOPE"), None);
        assert!(!table.rebind_type("NOPE", DataType::Int));
    }

    #[test]
    fn rebind_changes_only_the_type() {
        let mut table = SymbolTable::new();
        table.insert("X", DataType::Terminal, 4);
        assert!(table.rebind_type("X", DataType::Char));
        assert_eq!(table.lookup_type("X"), Some(DataType::Char));
        assert_eq!(table.lookup_value("X"), Some(4));
    }

    /// Chaining keeps distinct names apart even when the table is tiny
    /// enough that collisions are guaranteed.
    #[test]
    fn chaining_in_a_tiny_table() {
        let mut table = SymbolTable::with_buckets(1);
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            assert!(table.insert(name, DataType::Int, i as u32 + 1));
        }
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            assert_eq!(table.lookup_value(name), Some(i as u32 + 1));
        }
    }
}
