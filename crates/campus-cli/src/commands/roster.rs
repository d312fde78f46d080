use crate::Credentials;
use anyhow::{Context, Result};
use campus_core::portal::{DemoAuthGate, Role, StudentRecord, mount_admin_view};
use colored::Colorize;

/// Prints the demo roster, optionally filtered.
pub fn run(filter: &str, credentials: &Credentials) -> Result<()> {
    let gate = DemoAuthGate::new();
    gate.sign_in(Role::Admin, &credentials.email, &credentials.password)
        .context("Admin sign-in failed")?;
    let roster = mount_admin_view(&gate)?;

    let stats = roster.stats();
    println!(
        "{}",
        format!(
            "{} students • average attendance {:.1}%",
            stats.total_students, stats.average_attendance
        )
        .bright_magenta()
        .bold()
    );
    println!(
        "{}",
        format_row("ID", "Name", "Email", "Course", "Year", "Attendance").bold()
    );

    let matches = roster.filter(filter);
    if matches.is_empty() {
        println!("{}", "No students match the filter".bright_black());
    }
    for student in matches {
        println!("{}", format_student(student));
    }
    Ok(())
}

fn format_row(id: &str, name: &str, email: &str, course: &str, year: &str, att: &str) -> String {
    format!("{id:<4} {name:<16} {email:<20} {course:<24} {year:<5} {att:>10}")
}

fn format_student(student: &StudentRecord) -> String {
    let row = format_row(
        &student.id,
        &student.name,
        &student.email,
        &student.course,
        &student.year,
        &format!("{}%", student.attendance),
    );
    if student.attendance < 80 {
        row.yellow().to_string()
    } else {
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::portal::Roster;

    #[test]
    fn test_format_student_row() {
        colored::control::set_override(false);
        let roster = Roster::with_demo_students();
        let row = format_student(roster.get("2").unwrap());
        assert!(row.starts_with("2    Sarah Johnson"));
        assert!(row.trim_end().ends_with("92%"));
    }
}
