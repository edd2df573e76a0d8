//! Course par data.

use serde::{Deserialize, Serialize};

use crate::{CourseId, Result, SirecupError, constants::HOLES_PER_ROUND};

/// A golf course with per-hole pars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Par for holes 1..=18, in order.
    pub pars: Vec<u8>,
}

impl Course {
    #[must_use]
    pub fn new(id: CourseId, name: impl Into<String>, pars: Vec<u8>) -> Self {
        Self {
            id,
            name: name.into(),
            pars,
        }
    }

    /// Course par (sum over all holes).
    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.pars.iter().map(|&p| u32::from(p)).sum()
    }

    /// # Errors
    /// Returns [`SirecupError::InvalidCourse`] unless there are exactly 18
    /// holes, each with a non-zero par.
    pub fn validate(&self) -> Result<()> {
        if self.pars.len() != HOLES_PER_ROUND {
            return Err(SirecupError::InvalidCourse {
                course: self.id,
                reason: format!(
                    "expected {HOLES_PER_ROUND} pars, got {}",
                    self.pars.len()
                ),
            });
        }
        if let Some(hole) = self.pars.iter().position(|&p| p == 0) {
            return Err(SirecupError::InvalidCourse {
                course: self.id,
                reason: format!("hole {} has par 0", hole + 1),
            });
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Course {
    /// A par-72 layout: par 4 everywhere except two par 3s and two par 5s
    /// per nine.
    pub fn dummy_par72(id: u64) -> Self {
        let nine = [4, 5, 4, 3, 4, 4, 3, 5, 4];
        let pars = nine.iter().chain(nine.iter()).copied().collect();
        Self::new(CourseId(id), format!("Course {id}"), pars)
    }
}
