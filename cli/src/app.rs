//! Interactive command loop for the employee directory.
//!
//! # Design
//! `App` owns the input form and the last successfully fetched list, and
//! maps user intents {list, add, update, delete(id)} to the core's four
//! operations. The displayed table is replaced wholesale on every
//! successful list fetch and left untouched on failure. All operation
//! failures are handled here and rendered as messages; only terminal I/O
//! errors propagate out of `run`.

use std::io::{self, BufRead, Write};

use directory_core::{
    validate, view, ApiError, DirectoryClient, Employee, EmployeeUpdate, NewEmployee,
};
use log::error;

use crate::transport::Transport;

/// The shared input form: an id field used for update targeting plus the
/// two name fields used by both add and update.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Form {
    fn reset(&mut self) {
        *self = Form::default();
    }
}

/// One user intent, parsed from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    First(String),
    Last(String),
    Id(String),
    ShowForm,
    ClearForm,
    Add,
    Update,
    Delete(String),
    Help,
    Quit,
}

/// Parse one trimmed, non-empty input line.
fn parse_command(line: &str) -> Result<Command, String> {
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };
    match keyword {
        "list" => Ok(Command::List),
        "first" => Ok(Command::First(rest.to_string())),
        "last" => Ok(Command::Last(rest.to_string())),
        "id" => Ok(Command::Id(rest.to_string())),
        "form" => Ok(Command::ShowForm),
        "clear" => Ok(Command::ClearForm),
        "add" => Ok(Command::Add),
        "update" => Ok(Command::Update),
        "delete" => {
            if rest.is_empty() {
                Err("usage: delete <id>".to_string())
            } else {
                Ok(Command::Delete(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (type 'help')")),
    }
}

/// The directory front end: core client + transport + form + cached list.
pub struct App<T, R, W> {
    client: DirectoryClient,
    transport: T,
    form: Form,
    employees: Vec<Employee>,
    input: R,
    out: W,
}

impl<T: Transport, R: BufRead, W: Write> App<T, R, W> {
    pub fn new(client: DirectoryClient, transport: T, input: R, out: W) -> Self {
        Self {
            client,
            transport,
            form: Form::default(),
            employees: Vec::new(),
            input,
            out,
        }
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Fetches and renders the list once on entry, like the original page
    /// load, then processes one command per line.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "employee directory — type 'help' for commands")?;
        self.refresh()?;
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_command(line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.dispatch(command)?,
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::List => self.refresh(),
            Command::First(value) => {
                self.form.first_name = value;
                Ok(())
            }
            Command::Last(value) => {
                self.form.last_name = value;
                Ok(())
            }
            Command::Id(value) => {
                self.form.employee_id = value;
                Ok(())
            }
            Command::ShowForm => self.show_form(),
            Command::ClearForm => {
                self.form.reset();
                Ok(())
            }
            Command::Add => self.add(),
            Command::Update => self.update(),
            Command::Delete(raw_id) => self.delete(&raw_id),
            Command::Help => self.help(),
            Command::Quit => Ok(()),
        }
    }

    /// Re-fetch the full collection and replace the rendered view.
    ///
    /// On any failure — transport, status, or malformed body — the previous
    /// view is kept and the diagnostic goes to the log only.
    fn refresh(&mut self) -> io::Result<()> {
        let req = self.client.build_list_employees();
        let result = self
            .transport
            .execute(&req)
            .map_err(|e| e.to_string())
            .and_then(|resp| self.client.parse_list_employees(resp).map_err(|e| e.to_string()));
        match result {
            Ok(employees) => {
                self.employees = employees;
                write!(self.out, "{}", view::render_table(&self.employees))?;
            }
            Err(err) => error!("error fetching users: {err}"),
        }
        Ok(())
    }

    /// Create an employee from the form's name fields.
    fn add(&mut self) -> io::Result<()> {
        if !validate::is_valid_name(&self.form.first_name) || !validate::is_valid_name(&self.form.last_name) {
            writeln!(self.out, "Please enter alphabetical characters Only")?;
            return Ok(());
        }

        let input = NewEmployee {
            first_name: self.form.first_name.clone(),
            last_name: self.form.last_name.clone(),
        };
        let result = match self.client.build_create_employee(&input) {
            Ok(req) => self
                .transport
                .execute(&req)
                .map_err(|e| e.to_string())
                .and_then(|resp| self.client.parse_create_employee(resp).map_err(|e| e.to_string())),
            Err(err) => Err(err.to_string()),
        };
        match result {
            Ok(_reply) => {
                self.form.reset();
                self.refresh()?;
            }
            Err(err) => {
                error!("error creating user: {err}");
                writeln!(self.out, "Error creating user")?;
            }
        }
        Ok(())
    }

    /// Update the employee addressed by the form's id field.
    ///
    /// The id field must be set before anything else is validated. 404 is
    /// reported as "Entry does not exist", distinct from other failures.
    fn update(&mut self) -> io::Result<()> {
        if self.form.employee_id.is_empty() {
            writeln!(self.out, "Please enter the Employee ID to update.")?;
            return Ok(());
        }
        if !validate::is_valid_employee_id(&self.form.employee_id) {
            writeln!(self.out, "Please enter numerical characters only")?;
            return Ok(());
        }
        if !validate::is_valid_name(&self.form.first_name) || !validate::is_valid_name(&self.form.last_name) {
            writeln!(self.out, "Please enter alphabetical characters Only")?;
            return Ok(());
        }
        let id: u32 = match self.form.employee_id.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.out, "Please enter numerical characters only")?;
                return Ok(());
            }
        };

        let input = EmployeeUpdate {
            employee_id: id,
            first_name: self.form.first_name.clone(),
            last_name: self.form.last_name.clone(),
        };
        let result = match self.client.build_update_employee(id, &input) {
            Ok(req) => match self.transport.execute(&req) {
                Ok(resp) => self.client.parse_update_employee(resp),
                Err(err) => {
                    error!("error updating user: {err}");
                    writeln!(self.out, "Error updating user: {err}")?;
                    return Ok(());
                }
            },
            Err(err) => Err(err),
        };
        match result {
            Ok(_reply) => {
                self.form.reset();
                self.refresh()?;
            }
            Err(ApiError::NotFound) => writeln!(self.out, "Entry does not exist")?,
            Err(err) => {
                error!("error updating user: {err}");
                writeln!(self.out, "Error updating user: {err}")?;
            }
        }
        Ok(())
    }

    /// Delete the addressed employee after interactive confirmation.
    fn delete(&mut self, raw_id: &str) -> io::Result<()> {
        if !validate::is_valid_employee_id(raw_id) {
            writeln!(self.out, "Please enter numerical characters only")?;
            return Ok(());
        }
        let id: u32 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.out, "Please enter numerical characters only")?;
                return Ok(());
            }
        };

        if !self.confirm("Are you sure you want to delete this user? [y/N] ")? {
            return Ok(());
        }

        let req = self.client.build_delete_employee(id);
        let result = match self.transport.execute(&req) {
            Ok(resp) => self.client.parse_delete_employee(resp),
            Err(err) => {
                writeln!(self.out, "Error deleting user: {err}")?;
                return Ok(());
            }
        };
        match result {
            Ok(reply) => {
                self.refresh()?;
                writeln!(self.out, "{}", reply.message)?;
            }
            Err(err) => writeln!(self.out, "Error deleting user: {err}")?,
        }
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(matches!(line.trim(), "y" | "Y" | "yes"))
    }

    fn show_form(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "id: {:?}  first: {:?}  last: {:?}",
            self.form.employee_id, self.form.first_name, self.form.last_name,
        )
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "commands:\n  \
             list           fetch and display all employees\n  \
             first <name>   set the first-name field\n  \
             last <name>    set the last-name field\n  \
             id <value>     set the employee-id field (update target)\n  \
             form           show the current form\n  \
             clear          clear the form\n  \
             add            create an employee from the form\n  \
             update         update the employee addressed by the id field\n  \
             delete <id>    delete an employee (asks for confirmation)\n  \
             help           show this help\n  \
             quit           exit"
        )
    }
}
