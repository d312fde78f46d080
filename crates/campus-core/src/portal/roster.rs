//! In-memory student records for the admin section.

use crate::error::{CampusError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student as listed in the admin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: String,
    /// Attendance percentage.
    pub attendance: u8,
}

/// Fields an admin fills in when adding a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: String,
}

/// Numbers shown on the admin dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterStats {
    pub total_students: usize,
    pub average_attendance: f64,
}

/// Ordered list of students. Always reflects the last mutation.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five students the demo portal starts with.
    pub fn with_demo_students() -> Self {
        let seed = [
            ("1", "John Smith", "john@college.edu", "Computer Science", "3rd", 85),
            ("2", "Sarah Johnson", "sarah@college.edu", "Information Technology", "2nd", 92),
            ("3", "Mike Wilson", "mike@college.edu", "Computer Science", "4th", 78),
            ("4", "Emily Brown", "emily@college.edu", "Data Science", "3rd", 88),
            ("5", "Chris Davis", "chris@college.edu", "Computer Science", "1st", 95),
        ];
        let students = seed
            .into_iter()
            .map(|(id, name, email, course, year, attendance)| StudentRecord {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                course: course.to_string(),
                year: year.to_string(),
                attendance,
            })
            .collect();
        Self { students }
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Adds a student with full attendance.
    ///
    /// # Errors
    ///
    /// `CampusError::Validation` if any field is blank.
    pub fn add(&mut self, new: NewStudent) -> Result<&StudentRecord> {
        let blank: Vec<&str> = [
            ("name", &new.name),
            ("email", &new.email),
            ("course", &new.course),
            ("year", &new.year),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !blank.is_empty() {
            return Err(CampusError::validation(format!(
                "missing fields: {}",
                blank.join(", ")
            )));
        }

        let record = StudentRecord {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            email: new.email.trim().to_string(),
            course: new.course.trim().to_string(),
            year: new.year.trim().to_string(),
            attendance: 100,
        };
        tracing::info!("[Roster] Added student {} ({})", record.name, record.id);
        self.students.push(record);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Removes and returns the student with `id`.
    pub fn remove(&mut self, id: &str) -> Result<StudentRecord> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CampusError::not_found("student", id))?;
        let removed = self.students.remove(index);
        tracing::info!("[Roster] Removed student {} ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Case-insensitive substring match on name, email and course.
    /// A blank query matches everyone.
    pub fn filter(&self, query: &str) -> Vec<&StudentRecord> {
        let query = query.trim().to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                query.is_empty()
                    || s.name.to_lowercase().contains(&query)
                    || s.email.to_lowercase().contains(&query)
                    || s.course.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn stats(&self) -> RosterStats {
        let total_students = self.students.len();
        let average_attendance = if total_students == 0 {
            0.0
        } else {
            self.students
                .iter()
                .map(|s| f64::from(s.attendance))
                .sum::<f64>()
                / total_students as f64
        };
        RosterStats {
            total_students,
            average_attendance,
        }
    }
}
