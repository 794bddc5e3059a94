//! Gender partitioning.

use crate::models::{Gender, Student};

/// Students split by gender marker, order inherited from the input.
#[derive(Debug, Clone, Default)]
pub struct GenderPools {
    /// Marker `"M"`.
    pub male: Vec<Student>,
    /// Marker `"F"`.
    pub female: Vec<Student>,
    /// Any other marker. Not distributed.
    pub unrecognised: Vec<Student>,
}

impl GenderPools {
    /// Splits students by exact marker match.
    pub fn partition(students: Vec<Student>) -> Self {
        let mut pools = Self::default();
        for s in students {
            match s.gender() {
                Some(Gender::Male) => pools.male.push(s),
                Some(Gender::Female) => pools.female.push(s),
                None => pools.unrecognised.push(s),
            }
        }
        pools
    }

    /// The pool for a gender.
    pub fn pool(&self, gender: Gender) -> &[Student] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(students: &[Student]) -> Vec<i32> {
        students.iter().map(|s| s.id.0).collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let pools = GenderPools::partition(vec![
            Student::new(1, "F"),
            Student::new(2, "M"),
            Student::new(3, "F"),
            Student::new(4, "M"),
        ]);
        assert_eq!(ids(&pools.male), vec![2, 4]);
        assert_eq!(ids(&pools.female), vec![1, 3]);
        assert!(pools.unrecognised.is_empty());
        assert_eq!(ids(pools.pool(Gender::Female)), vec![1, 3]);
    }

    #[test]
    fn test_partition_unrecognised() {
        let pools = GenderPools::partition(vec![
            Student::new(1, "X"),
            Student::new(2, "m"),
            Student::new(3, ""),
            Student::new(4, "M"),
        ]);
        assert_eq!(ids(&pools.male), vec![4]);
        assert!(pools.female.is_empty());
        assert_eq!(ids(&pools.unrecognised), vec![1, 2, 3]);
    }
}
