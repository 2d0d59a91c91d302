//! Set walkthrough: deduplication, mutation, relations and Venn operations.

use std::io::Write;
use tracing::info;

use crate::error::Result;
use crate::output::Console;
use crate::sets::ValueSet;

/// Runs the set steps. Holds no state; every step builds its own sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetsDemo;

impl SetsDemo {
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        info!("sets demo start");
        self.build_and_mutate(console)?;
        self.relations(console)?;
        self.venn(console)?;
        info!("sets demo done");
        Ok(())
    }

    /// Dedupe a list, build empty and literal sets, add, update, discard.
    pub fn build_and_mutate<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("1. Building and changing sets")?;

        let list = vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5];
        console.line(format!("{list:?}"))?;

        // A list turned into a set loses its duplicates
        let mut from_list: ValueSet = list.iter().copied().collect();
        console.line(from_list.to_string())?;

        let mut empty = ValueSet::new();
        console.line(empty.to_string())?;

        let literal: ValueSet = [1, 4, 6].into_iter().collect();
        console.line(literal.to_string())?;

        empty.add(3);
        empty.add("a");
        empty.add("a");
        console.line(empty.to_string())?;

        from_list.update(&empty);
        console.line(from_list.to_string())?;

        // remove(25) would fail here; discard tolerates absence
        let removed = empty.discard(25);
        console.line(format!("discard(25) removed anything: {removed}"))?;
        Ok(())
    }

    /// Disjoint, subset and superset tests.
    pub fn relations<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("2. Comparing sets")?;
        let (a, b) = Self::venn_pair();

        console.line(format!("{a} disjoint {b}: {}", a.is_disjoint(&b)))?;
        let far: ValueSet = [25, 50, 99].into_iter().collect();
        console.line(format!("{far} disjoint {b}: {}", far.is_disjoint(&b)))?;

        let small: ValueSet = [1, 2, 3].into_iter().collect();
        console.line(format!("{small} subset of {a}: {}", small.is_subset(&a)))?;
        console.line(format!("{a} superset of {small}: {}", a.is_superset(&small)))?;
        Ok(())
    }

    /// Union, intersection, both differences, symmetric difference.
    pub fn venn<W: Write>(&self, console: &mut Console<W>) -> Result<()> {
        console.title("3. Venn diagram operations")?;
        let (a, b) = Self::venn_pair();

        console.line(format!("union                : {}", &a | &b))?;
        console.line(format!("intersection         : {}", &a & &b))?;
        console.line(format!("difference (a - b)   : {}", &a - &b))?;
        console.line(format!("difference (b - a)   : {}", &b - &a))?;
        console.line(format!("symmetric difference : {}", &a ^ &b))?;
        Ok(())
    }

    fn venn_pair() -> (ValueSet, ValueSet) {
        ((1..=6).collect(), (5..=10).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(f: impl FnOnce(&mut Console<Vec<u8>>) -> Result<()>) -> Vec<String> {
        let mut console = Console::new(Vec::new());
        f(&mut console).unwrap();
        String::from_utf8(console.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_build_and_mutate_lines() {
        let lines = transcript(|c| SetsDemo.build_and_mutate(c));
        let body: Vec<&str> = lines.iter().skip(4).map(String::as_str).collect();
        assert_eq!(
            body,
            vec![
                "[1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5]",
                "{1, 2, 3, 4, 5}",
                "set()",
                "{1, 4, 6}",
                "{3, 'a'}",
                "{1, 2, 3, 4, 5, 'a'}",
                "discard(25) removed anything: false",
            ]
        );
    }

    #[test]
    fn test_relations_lines() {
        let lines = transcript(|c| SetsDemo.relations(c));
        assert!(lines.contains(&"{1, 2, 3, 4, 5, 6} disjoint {5, 6, 7, 8, 9, 10}: false".to_string()));
        assert!(lines.contains(&"{25, 50, 99} disjoint {5, 6, 7, 8, 9, 10}: true".to_string()));
        assert!(lines.contains(&"{1, 2, 3} subset of {1, 2, 3, 4, 5, 6}: true".to_string()));
        assert!(lines.contains(&"{1, 2, 3, 4, 5, 6} superset of {1, 2, 3}: true".to_string()));
    }

    #[test]
    fn test_venn_lines() {
        let lines = transcript(|c| SetsDemo.venn(c));
        assert!(lines.contains(&"union                : {1, 2, 3, 4, 5, 6, 7, 8, 9, 10}".to_string()));
        assert!(lines.contains(&"intersection         : {5, 6}".to_string()));
        assert!(lines.contains(&"difference (a - b)   : {1, 2, 3, 4}".to_string()));
        assert!(lines.contains(&"difference (b - a)   : {7, 8, 9, 10}".to_string()));
        assert!(lines.contains(&"symmetric difference : {1, 2, 3, 4, 7, 8, 9, 10}".to_string()));
    }
}
