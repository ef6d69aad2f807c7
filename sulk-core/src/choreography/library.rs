//! Choreography library and random selection

use super::program::ChoreographyProgram;
use crate::traits::RandomSource;

/// A program picked for one wake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection<'a> {
    /// Index in the library
    pub index: usize,
    /// The program itself
    pub program: &'a ChoreographyProgram,
}

/// Ordered, read-only collection of programs
#[derive(Debug, Clone, Copy)]
pub struct ChoreographyLibrary<'a> {
    programs: &'a [ChoreographyProgram],
}

impl<'a> ChoreographyLibrary<'a> {
    /// Wrap a slice of programs
    pub const fn new(programs: &'a [ChoreographyProgram]) -> Self {
        Self { programs }
    }

    /// Number of programs
    pub const fn len(&self) -> usize {
        self.programs.len()
    }

    /// Check if there is nothing to select
    pub const fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Program at an index
    pub fn get(&self, index: usize) -> Option<&'a ChoreographyProgram> {
        self.programs.get(index)
    }

    /// Iterate programs in library order
    pub fn iter(&self) -> impl Iterator<Item = &'a ChoreographyProgram> {
        self.programs.iter()
    }

    /// Pick one program uniformly at random
    ///
    /// Returns `None` for an empty library.
    pub fn select<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Selection<'a>> {
        if self.programs.is_empty() {
            return None;
        }

        let bound = u32::try_from(self.programs.len()).unwrap_or(u32::MAX);
        let index = rng.next_below(bound) as usize;
        self.get(index).map(|program| Selection { index, program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreography::MotionCommand;
    use crate::mock::FixedRandom;

    static ONE: [MotionCommand; 1] = [MotionCommand::door(100, 100, 0)];
    static TWO: [MotionCommand; 2] = [
        MotionCommand::arm(100, 100, 0),
        MotionCommand::arm(0, 100, 0),
    ];

    static PROGRAMS: [ChoreographyProgram; 3] = [
        ChoreographyProgram::new("a", &ONE),
        ChoreographyProgram::new("b", &TWO),
        ChoreographyProgram::new("c", &[]),
    ];

    #[test]
    fn test_select_matches_get() {
        let library = ChoreographyLibrary::new(&PROGRAMS);
        for k in 0..3 {
            let selection = library.select(&mut FixedRandom(k)).unwrap();
            assert_eq!(selection.index, k as usize);
            assert_eq!(Some(selection.program), library.get(k as usize));
        }
    }

    #[test]
    fn test_empty_library_selects_nothing() {
        let library = ChoreographyLibrary::new(&[]);
        assert!(library.is_empty());
        assert_eq!(library.select(&mut FixedRandom(0)), None);
    }

    #[test]
    fn test_get_and_iter() {
        let library = ChoreographyLibrary::new(&PROGRAMS);
        assert_eq!(library.len(), 3);
        assert_eq!(library.get(1).map(|p| p.name), Some("b"));
        assert_eq!(library.get(3), None);

        let names: Vec<_> = library.iter().map(|p| p.name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
