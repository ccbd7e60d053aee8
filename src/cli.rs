use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::attendance::AttendanceStatus;

#[derive(Debug, Parser)]
#[command(name = "hrms", about = "Console client for the HRMS REST API", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Employee record management
    Employees {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
    /// List the server-defined departments
    Departments,
    /// Attendance marking, viewing and editing
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommand,
    },
    /// Server-computed dashboard: totals, today, per-department counts
    Dashboard {
        /// Show only employees of one department
        #[arg(long)]
        department: Option<String>,
    },
    /// Client-side per-employee attendance summary across all employees
    Summary,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees, optionally filtered by a search term
    List {
        /// Case-insensitive match on name, id, email, department or phone
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new employee
    Add(AddEmployeeArgs),
    /// Delete an employee by id
    Delete {
        employee_id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct AddEmployeeArgs {
    /// Explicit employee id; omit with --auto-id to use a server suggestion
    #[arg(long, required_unless_present = "auto_id", conflicts_with = "auto_id")]
    pub id: Option<String>,
    /// Ask the server to suggest an id from the name
    #[arg(long)]
    pub auto_id: bool,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// 10-digit phone number
    #[arg(long)]
    pub phone: String,
    /// Must be one of the server-defined departments
    #[arg(long)]
    pub department: String,
}

#[derive(Debug, Subcommand)]
pub enum AttendanceCommand {
    /// Mark attendance for an employee on a date (YYYY-MM-DD)
    Mark {
        employee_id: String,
        date: NaiveDate,
        status: AttendanceStatus,
    },
    /// Show an employee's records with totals and editability
    View {
        employee_id: String,
        /// Exact-date filter, applied server-side
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Range filter start (inclusive); needs --to
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        /// Range filter end (inclusive); needs --from
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
    },
    /// Change the status of an existing record (dates up to today only)
    Update {
        employee_id: String,
        date: NaiveDate,
        status: AttendanceStatus,
    },
    /// Month-grid calendar of an employee's attendance
    Calendar {
        employee_id: String,
        /// Month to show as YYYY-MM; defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}
