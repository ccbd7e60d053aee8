//! Console front end: one fetch → derive → print cycle per command.
//! Failures are converted to one-line user messages at this boundary.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};

use crate::api::ApiClient;
use crate::calendar::{self, DayState, MonthCursor};
use crate::cli::{AddEmployeeArgs, AttendanceCommand, Command, EmployeeCommand};
use crate::intake::{self, IdSuggester};
use crate::model::attendance::{AttendanceStatus, MarkAttendance};
use crate::model::employee::{self, NewEmployee};
use crate::report::{self, AttendanceQuery, AttendanceView, DateRange};
use crate::utils::department_cache;

const DEMO_BANNER: &str =
    "Demo Mode: database not connected. Showing sample data only; changes will not be saved.";

pub async fn run(command: Command, client: &ApiClient) -> anyhow::Result<()> {
    match command {
        Command::Employees { command } => match command {
            EmployeeCommand::List { search } => employees_list(client, search.as_deref()).await,
            EmployeeCommand::Add(args) => employees_add(client, args).await,
            EmployeeCommand::Delete { employee_id, yes } => {
                employees_delete(client, &employee_id, yes).await
            }
        },
        Command::Departments => departments(client).await,
        Command::Attendance { command } => match command {
            AttendanceCommand::Mark {
                employee_id,
                date,
                status,
            } => attendance_mark(client, employee_id, date, status).await,
            AttendanceCommand::View {
                employee_id,
                date,
                from,
                to,
            } => attendance_view(client, employee_id, date, from, to).await,
            AttendanceCommand::Update {
                employee_id,
                date,
                status,
            } => attendance_update(client, employee_id, date, status).await,
            AttendanceCommand::Calendar { employee_id, month } => {
                attendance_calendar(client, employee_id, month).await
            }
        },
        Command::Dashboard { department } => dashboard(client, department.as_deref()).await,
        Command::Summary => summary(client).await,
    }
}

async fn employees_list(client: &ApiClient, search: Option<&str>) -> anyhow::Result<()> {
    let employees = client.list_employees().await?;
    if employee::is_demo_data(&employees) {
        println!("{DEMO_BANNER}\n");
    }
    let shown: Vec<_> = match search {
        Some(term) => employees.iter().filter(|e| e.matches_search(term)).collect(),
        None => employees.iter().collect(),
    };

    println!("Employees ({} of {})", shown.len(), employees.len());
    if shown.is_empty() {
        match search {
            Some(term) => println!("No employees found matching \"{term}\""),
            None => println!("No employees found"),
        }
        return Ok(());
    }
    println!(
        "{:<12} {:<24} {:<28} {:<12} {}",
        "ID", "Name", "Email", "Phone", "Department"
    );
    for emp in shown {
        println!(
            "{:<12} {:<24} {:<28} {:<12} {}",
            emp.employee_id, emp.full_name, emp.email, emp.phone, emp.department
        );
    }
    Ok(())
}

async fn employees_add(client: &ApiClient, args: AddEmployeeArgs) -> anyhow::Result<()> {
    let departments = department_cache::departments(client)
        .await
        .context("Failed to load departments")?;

    let employee_id = match args.id {
        Some(id) => id,
        None => {
            // auto-id: run the same debounced suggestion path the form uses
            let mut suggester = IdSuggester::new(client.clone());
            suggester.on_name_change(&args.name);
            match suggester.next_suggestion().await {
                Some(id) => {
                    println!("Generated Employee ID: {id}");
                    id
                }
                None => bail!("Could not generate an employee ID; supply one with --id"),
            }
        }
    };

    let employee = NewEmployee {
        employee_id,
        full_name: args.name,
        email: args.email,
        phone: args.phone,
        department: args.department,
    };
    if let Err(msg) = intake::validate_new_employee(&employee, &departments) {
        // the cached department set may be stale; refetch on the next try
        department_cache::invalidate().await;
        bail!(msg);
    }

    match client.add_employee(&employee).await {
        Ok(message) => {
            println!("{}", non_empty(message, "Employee added successfully"));
            Ok(())
        }
        Err(e) if args.auto_id && e.is_conflict() => bail!(
            "{} (the suggested ID may have been taken; re-run to fetch a new one)",
            e.user_message()
        ),
        Err(e) => Err(e.into()),
    }
}

async fn employees_delete(
    client: &ApiClient,
    employee_id: &str,
    skip_confirm: bool,
) -> anyhow::Result<()> {
    if !skip_confirm && !confirm(&format!("Delete employee {employee_id}?"))? {
        println!("Cancelled");
        return Ok(());
    }
    let message = client.delete_employee(employee_id).await?;
    println!("{}", non_empty(message, "Employee deleted successfully"));
    Ok(())
}

async fn departments(client: &ApiClient) -> anyhow::Result<()> {
    let departments = client.list_departments().await?;
    println!("Departments ({})", departments.len());
    for dept in departments {
        println!("  {dept}");
    }
    Ok(())
}

async fn attendance_mark(
    client: &ApiClient,
    employee_id: String,
    date: NaiveDate,
    status: AttendanceStatus,
) -> anyhow::Result<()> {
    let message = client
        .mark_attendance(&MarkAttendance {
            employee_id,
            date,
            status,
        })
        .await?;
    println!("{}", non_empty(message, "Attendance marked successfully"));
    Ok(())
}

async fn attendance_view(
    client: &ApiClient,
    employee_id: String,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let range = match (from, to) {
        (Some(start), Some(end)) => Some(DateRange { start, end }),
        _ => None,
    };
    let mut view = AttendanceView::new(client.clone());
    view.fetch(AttendanceQuery {
        employee_id,
        date,
        range,
    })
    .await;
    print_view(&view)
}

async fn attendance_update(
    client: &ApiClient,
    employee_id: String,
    date: NaiveDate,
    status: AttendanceStatus,
) -> anyhow::Result<()> {
    let mut view = AttendanceView::new(client.clone());
    view.fetch(AttendanceQuery {
        employee_id,
        date: None,
        range: None,
    })
    .await;
    if let Some(error) = &view.error {
        bail!(error.clone());
    }
    if view.update(date, status).await {
        println!("Attendance updated successfully\n");
        print_view(&view)
    } else {
        bail!(view.error.unwrap_or_else(|| "Failed to update attendance".to_string()))
    }
}

fn print_view(view: &AttendanceView) -> anyhow::Result<()> {
    if let Some(error) = &view.error {
        bail!(error.clone());
    }
    let Some(report) = &view.report else {
        return Ok(());
    };
    let totals = &report.totals;
    println!(
        "Total Records: {}   Present: {}   Absent: {}   Attendance Rate: {:.1}%",
        totals.total, totals.present, totals.absent, totals.rate
    );
    if report.records.is_empty() {
        println!("No attendance records found");
        return Ok(());
    }
    println!("\n{:<12} {:<8} {}", "Date", "Status", "Editable");
    for record in &report.records {
        let editable = if report::is_editable(record.date) {
            "yes"
        } else {
            "no (future)"
        };
        println!("{:<12} {:<8} {}", record.date, record.status, editable);
    }
    Ok(())
}

async fn attendance_calendar(
    client: &ApiClient,
    employee_id: String,
    month: Option<String>,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let cursor = match month {
        Some(month) => parse_month(&month)?,
        None => MonthCursor::from_date(today),
    };

    let history = client.get_attendance(&employee_id, None).await?;
    let grid = calendar::month_grid(cursor, &history.records, today);

    println!("{} — {}", grid.cursor.label(), employee_id);
    println!("Sun Mon Tue Wed Thu Fri Sat");
    let mut column = 0;
    for _ in 0..grid.leading_blanks {
        print!("    ");
        column += 1;
    }
    for cell in &grid.cells {
        let marker = match cell.state {
            DayState::Present => '+',
            DayState::Absent => 'x',
            DayState::NoRecord => '.',
            DayState::Future => ' ',
        };
        print!("{:>2}{} ", cell.day, marker);
        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }
    println!("\n+ present   x absent   . no record   (blank: future)");
    let previous = grid.cursor.previous();
    match grid.cursor.next(today) {
        Some(next) => println!(
            "Navigate with --month {} / --month {}",
            month_flag(&previous),
            month_flag(&next)
        ),
        None => println!(
            "Previous month: --month {} (next month is in the future)",
            month_flag(&previous)
        ),
    }
    Ok(())
}

fn month_flag(cursor: &MonthCursor) -> String {
    format!("{:04}-{:02}", cursor.year(), cursor.month())
}

async fn dashboard(client: &ApiClient, department: Option<&str>) -> anyhow::Result<()> {
    // both halves load concurrently, as one screen
    let (stats, employees) = tokio::join!(client.dashboard_stats(), client.employee_dashboard());
    let stats = stats.context("Failed to load dashboard data")?;
    let dashboard = employees.context("Failed to load dashboard data")?;

    if let Some(message) = &stats.message {
        println!("Demo Mode: {message}\n");
    }

    println!("Dashboard Overview");
    println!("  Total Employees:    {}", stats.total_employees);
    println!("  Attendance Records: {}", stats.total_attendance_records);
    println!("  Total Present:      {}", stats.total_present);
    println!("  Total Absent:       {}", stats.total_absent);
    println!("  Attendance Rate:    {}%", stats.attendance_rate);

    if let Some(today) = &stats.today {
        println!("\nToday's Attendance ({})", today.date);
        println!(
            "  Present: {}   Absent: {}   Total Marked: {}   Rate: {}%",
            today.present, today.absent, today.total, today.attendance_rate
        );
    }

    let shown = dashboard.filtered_by_department(department);
    println!("\nEmployee Attendance Summary ({} employees)", shown.len());
    if shown.is_empty() {
        println!(
            "No employees found in this department (available: {})",
            dashboard.departments().join(", ")
        );
    }
    for emp in shown {
        println!(
            "  {:<12} {:<24} {:<16} records {:>3}  present {:>3}  absent {:>3}  rate {:>5.1}%  today: {}",
            emp.employee_id,
            emp.full_name,
            emp.department,
            emp.total_records,
            emp.present_count,
            emp.absent_count,
            emp.attendance_rate,
            emp.today_status
        );
        println!("               {}  {}", emp.email, emp.phone);
    }

    if !stats.department_stats.is_empty() {
        println!("\nEmployees by Department");
        for dept in &stats.department_stats {
            println!("  {:<24} {}", dept.department, dept.count);
        }
    }
    Ok(())
}

async fn summary(client: &ApiClient) -> anyhow::Result<()> {
    let rows = report::summary::employee_attendance_summary(client)
        .await
        .context("Failed to fetch employee attendance data")?;

    println!("Total Employee Attendance Summary ({} employees)", rows.len());
    println!(
        "{:<12} {:<24} {:<16} {:>7} {:>8} {:>7} {:>6}",
        "ID", "Name", "Department", "Records", "Present", "Absent", "Rate"
    );
    for row in rows {
        println!(
            "{:<12} {:<24} {:<16} {:>7} {:>8} {:>7} {:>5.1}%",
            row.employee_id,
            row.full_name,
            row.department,
            row.total_records,
            row.present_count,
            row.absent_count,
            row.attendance_rate
        );
    }
    Ok(())
}

fn parse_month(input: &str) -> anyhow::Result<MonthCursor> {
    input.split_once('-')
        .and_then(|(year, month)| {
            let year = year.parse().ok()?;
            let month = month.parse().ok()?;
            MonthCursor::new(year, month)
        })
        .ok_or_else(|| anyhow::anyhow!("Invalid month '{input}', expected YYYY-MM"))
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_input_parses_and_rejects() {
        let cursor = parse_month("2024-06").unwrap();
        assert_eq!((cursor.year(), cursor.month()), (2024, 6));
        assert!(parse_month("2024").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("June 2024").is_err());
    }

    #[test]
    fn blank_server_messages_fall_back() {
        assert_eq!(non_empty(String::new(), "done"), "done");
        assert_eq!(non_empty("Employee added successfully".into(), "done"),
            "Employee added successfully");
    }
}
