//! Interactive menu loop

use crate::application::input::Prompter;
use crate::cli::output::{
    format_empty_status, format_employee_list, format_position_prompt, ALLOCATION_FAILED,
    EXPORT_FAILED, GOODBYE, INVALID_CHOICE, INVALID_POSITION, LIST_CLEARED, MENU,
};
use crate::domain::RecordStore;
use crate::error::{Result, StaffrollError};
use crate::infrastructure::{export_report, Config};
use std::io::{BufRead, Write};

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Reset,
    AddEmployee,
    CheckEmpty,
    DisplayAll,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Reset),
            2 => Ok(MenuChoice::AddEmployee),
            3 => Ok(MenuChoice::CheckEmpty),
            4 => Ok(MenuChoice::DisplayAll),
            5 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Menu-driven session over a record store
pub struct Shell<R, W> {
    store: RecordStore,
    config: Config,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        let store = match config.max_records {
            Some(limit) => RecordStore::with_capacity_limit(limit),
            None => RecordStore::new(),
        };

        Shell {
            store,
            config,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu until exit or end of input, then export and release.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(StaffrollError::InputClosed) => {
                    tracing::info!("input closed, leaving menu");
                    self.prompter.say(GOODBYE)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.finish()
    }

    /// Show the menu and handle one choice; returns false once exit is chosen
    pub fn step(&mut self) -> Result<bool> {
        self.prompter.write(MENU)?;
        let choice = self.prompter.prompt_integer("")?;

        match MenuChoice::try_from(choice) {
            Ok(MenuChoice::Reset) => {
                self.store.clear();
                self.prompter.say(LIST_CLEARED)?;
            }
            Ok(MenuChoice::AddEmployee) => self.add_employee()?,
            Ok(MenuChoice::CheckEmpty) => {
                let status = format_empty_status(self.store.is_empty());
                self.prompter.say(&status)?;
            }
            Ok(MenuChoice::DisplayAll) => {
                let listing = format_employee_list(&self.store);
                self.prompter.write(&listing)?;
            }
            Ok(MenuChoice::Exit) => {
                self.prompter.say(GOODBYE)?;
                return Ok(false);
            }
            Err(other) => {
                tracing::debug!(choice = other, "unrecognised menu choice");
                self.prompter.say(INVALID_CHOICE)?;
            }
        }

        Ok(true)
    }

    fn add_employee(&mut self) -> Result<()> {
        let id = self.prompter.prompt_integer("Enter employee ID: ")?;
        let name = self.prompter.prompt_name(self.config.name_max_len)?;
        let salary = self.prompter.prompt_integer("Enter employee salary: ")? as f64;
        let end_slot = self.store.insertion_count().saturating_add(1);
        let position = self
            .prompter
            .prompt_integer(&format_position_prompt(end_slot))?;

        match self.store.insert(id, name, salary, position) {
            Ok(_) => Ok(()),
            Err(StaffrollError::AllocationFailure) => self.prompter.say(ALLOCATION_FAILED),
            Err(StaffrollError::InvalidPosition { .. }) => self.prompter.say(INVALID_POSITION),
            Err(e) => Err(e),
        }
    }

    /// Write the report and release every remaining record
    fn finish(&mut self) -> Result<()> {
        match export_report(&self.config.export_path, &self.store) {
            Ok(written) => tracing::info!(
                path = %self.config.export_path.display(),
                written,
                "wrote employee report"
            ),
            Err(e) => {
                tracing::warn!(
                    path = %self.config.export_path.display(),
                    error = %e,
                    "could not write employee report"
                );
                self.prompter.say(EXPORT_FAILED)?;
            }
        }

        let released = self.store.clear();
        tracing::debug!(released, "released remaining records");
        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
