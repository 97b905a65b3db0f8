//! Task creation and update parameters

use mcp_common::{invalid_params, McpResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_date, check_priority, require_non_empty};
use crate::todoist::{AddTaskArgs, UpdateTaskArgs};

/// Units Todoist accepts for a task duration
const DURATION_UNITS: &[&str] = &["minute", "day"];

/// Parameters for creating a task
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskParams {
    #[schemars(description = "Task content (the title)")]
    pub content: String,

    #[schemars(description = "Task description")]
    pub description: Option<String>,

    #[schemars(description = "The ID of a project to add the task to")]
    pub project_id: Option<String>,

    #[schemars(description = "The ID of a project collaborator to assign the task to")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Task priority from 1 (normal) to 4 (urgent)", range(min = 1, max = 4))]
    pub priority: Option<u8>,

    #[schemars(description = "Label names to attach to the task")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "The ID of a parent task")]
    pub parent_id: Option<String>,

    #[schemars(description = "Deadline date in YYYY-MM-DD format relative to the user's timezone")]
    pub deadline_date: Option<String>,

    #[schemars(description = "2-letter code specifying the language of the deadline")]
    pub deadline_lang: Option<String>,

    #[schemars(description = "Natural language description of the due date like 'tomorrow at 3pm'")]
    pub due_string: Option<String>,

    #[schemars(description = "Specific due date in YYYY-MM-DD format relative to the user's timezone")]
    pub due_date: Option<String>,

    #[schemars(description = "Full ISO datetime like '2023-12-31T15:00:00Z'")]
    pub due_datetime: Option<String>,

    #[schemars(description = "2-letter code specifying the language of the due date")]
    pub due_lang: Option<String>,

    #[schemars(description = "Duration of the task, requires durationUnit")]
    pub duration: Option<u32>,

    #[schemars(description = "Unit of the task duration: 'minute' or 'day'")]
    pub duration_unit: Option<String>,
}

impl AddTaskParams {
    pub fn validate(&self) -> McpResult<()> {
        require_non_empty("content", &self.content)?;
        check_priority(self.priority)?;
        check_date("dueDate", self.due_date.as_deref())?;
        check_date("deadlineDate", self.deadline_date.as_deref())?;

        match (self.duration, self.duration_unit.as_deref()) {
            (None, None) => {}
            (Some(0), _) => return Err(invalid_params("duration must be greater than 0")),
            (Some(_), Some(unit)) if DURATION_UNITS.contains(&unit) => {}
            (Some(_), Some(unit)) => {
                return Err(invalid_params(format!(
                    "durationUnit must be one of {:?}, got '{}'",
                    DURATION_UNITS, unit
                )))
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(invalid_params(
                    "duration and durationUnit must be given together",
                ))
            }
        }

        Ok(())
    }

    pub fn into_args(self) -> AddTaskArgs {
        AddTaskArgs {
            content: self.content,
            description: self.description,
            project_id: self.project_id,
            parent_id: self.parent_id,
            assignee_id: self.assignee_id,
            priority: self.priority,
            labels: self.labels,
            deadline_date: self.deadline_date,
            deadline_lang: self.deadline_lang,
            due_string: self.due_string,
            due_date: self.due_date,
            due_datetime: self.due_datetime,
            due_lang: self.due_lang,
            duration: self.duration,
            duration_unit: self.duration_unit,
        }
    }
}

/// Parameters for updating a task
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[schemars(description = "ID of the task to update")]
    pub task_id: String,

    #[schemars(description = "New task content (the title)")]
    pub content: Option<String>,

    #[schemars(description = "New task description")]
    pub description: Option<String>,

    #[schemars(description = "The ID of a project collaborator to assign the task to")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Task priority from 1 (normal) to 4 (urgent)", range(min = 1, max = 4))]
    pub priority: Option<u8>,

    #[schemars(description = "Label names, replacing the current labels")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "Natural language for the due date (e.g., 'today at 10am')")]
    pub due_string: Option<String>,

    #[schemars(description = "2-letter code specifying the language of the due date")]
    pub due_lang: Option<String>,

    #[schemars(description = "Specific date in YYYY-MM-DD format, used as the due datetime when dueDateTime is absent")]
    pub due_date: Option<String>,

    #[schemars(description = "Specific date and time in RFC3339 format (e.g., '2025-05-06T15:40:00Z')")]
    pub due_date_time: Option<String>,
}

impl UpdateTaskParams {
    pub fn validate(&self) -> McpResult<()> {
        require_non_empty("taskId", &self.task_id)?;
        check_priority(self.priority)?;
        check_date("dueDate", self.due_date.as_deref())?;
        Ok(())
    }

    /// Split into the task ID and the update body
    ///
    /// The update endpoint takes a single due datetime, so a bare `dueDate`
    /// is sent in its place when `dueDateTime` is absent.
    pub fn into_args(self) -> (String, UpdateTaskArgs) {
        let due_datetime = self.due_date_time.or(self.due_date);

        let args = UpdateTaskArgs {
            content: self.content,
            description: self.description,
            assignee_id: self.assignee_id,
            priority: self.priority,
            labels: self.labels,
            due_string: self.due_string,
            due_lang: self.due_lang,
            due_datetime,
        };

        (self.task_id, args)
    }
}
