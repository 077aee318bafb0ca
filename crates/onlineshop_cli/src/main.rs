//! Command-line entry point for the shop back office.
//!
//! # Responsibility
//! - Expose employee/department operations over a SQLite file.
//! - Print results as pretty JSON for scripting.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use onlineshop_core::db::open_db;
use onlineshop_core::{
    init_logging, sqlite_employee_service, DepartmentRepository, EmployeeRequest, ShopConfig,
    SqliteDepartmentRepository,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "onlineshop", version, about = "Online shop back-office tools")]
struct Cli {
    /// SQLite database file (overrides ONLINESHOP_DB_PATH).
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,
    /// Log level (overrides ONLINESHOP_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute log directory (overrides ONLINESHOP_LOG_DIR); stderr when unset.
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core linkage probe.
    Ping,
    /// Manage departments.
    #[command(subcommand)]
    Department(DepartmentCommand),
    /// Manage employees.
    #[command(subcommand)]
    Employee(EmployeeCommand),
}

#[derive(Subcommand, Debug)]
enum DepartmentCommand {
    /// Register a department.
    Add { name: String },
    /// List departments.
    List,
}

#[derive(Subcommand, Debug)]
enum EmployeeCommand {
    /// List all employees.
    List,
    /// Show one employee.
    Get { id: i64 },
    /// Create an employee.
    Create(EmployeeArgs),
    /// Update name, position and salary of an employee.
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    /// Delete an employee.
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    position: String,
    #[arg(long)]
    salary: i64,
    #[arg(long)]
    department_id: i64,
    #[arg(long)]
    manager_id: Option<i64>,
}

impl From<EmployeeArgs> for EmployeeRequest {
    fn from(value: EmployeeArgs) -> Self {
        Self {
            name: value.name,
            position: value.position,
            salary: value.salary,
            department_id: value.department_id,
            manager_id: value.manager_id,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Command::Ping = cli.command {
        println!("onlineshop_core ping={}", onlineshop_core::ping());
        println!("onlineshop_core version={}", onlineshop_core::core_version());
        return Ok(());
    }

    init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    info!("event=cli_start module=cli status=ok");

    match cli.command {
        Command::Ping => Ok(()),
        Command::Department(action) => run_department(&conn, action),
        Command::Employee(action) => run_employee(&conn, action),
    }
}

fn resolve_config(cli: &Cli) -> Result<ShopConfig> {
    let mut config = ShopConfig::from_env().context("invalid environment configuration")?;
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    Ok(config)
}

fn run_department(conn: &rusqlite::Connection, action: DepartmentCommand) -> Result<()> {
    let repo = SqliteDepartmentRepository::new(conn);
    match action {
        DepartmentCommand::Add { name } => print_json(&repo.create_department(&name)?),
        DepartmentCommand::List => print_json(&repo.find_all()?),
    }
}

fn run_employee(conn: &rusqlite::Connection, action: EmployeeCommand) -> Result<()> {
    let service = sqlite_employee_service(conn);
    match action {
        EmployeeCommand::List => print_json(&service.get_all_employees()?),
        EmployeeCommand::Get { id } => print_json(&service.get_employee_by_id(id)?),
        EmployeeCommand::Create(args) => print_json(&service.create_employee(&args.into())?),
        EmployeeCommand::Update { id, fields } => {
            print_json(&service.update_employee(id, &fields.into())?)
        }
        EmployeeCommand::Delete { id } => {
            service.delete_employee(id)?;
            println!("deleted employee {id}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
