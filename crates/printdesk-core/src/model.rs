use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    Medium,
    High,
}

/// Mailbox an email currently lives in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Inbox,
    Sent,
    Trash,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailRecord {
    pub id: u64,
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub content: String,
    pub is_read: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub attachments: Vec<String>,
    pub status: EmailStatus,
}

impl EmailRecord {
    /// Counted by the header badge: unread and still in the inbox.
    pub fn is_unread_in_inbox(&self) -> bool {
        !self.is_read && self.status == EmailStatus::Inbox
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    System,
    Print,
    Device,
    Quota,
    Security,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub content: String,
    pub is_read: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub category: String,
}

/// Administrative sub-pages that can be opened and closed from the sidebar.
///
/// Advanced user management is deliberately absent: its visibility flag lives
/// in [`NavigationState`] but no sidebar action drives it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    UserManagement,
    DeviceManagement,
    DeviceGroupManagement,
    DepartmentManagement,
    DepartmentAccountingReport,
    UserAccountingReport,
    PrintTrackingReport,
    ReportGeneration,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::UserManagement,
        Page::DeviceManagement,
        Page::DeviceGroupManagement,
        Page::DepartmentManagement,
        Page::DepartmentAccountingReport,
        Page::UserAccountingReport,
        Page::PrintTrackingReport,
        Page::ReportGeneration,
    ];
}

/// Visibility of every administrative page, as rendered by the UI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub show_user_management: bool,
    pub show_advanced_user_management: bool,
    pub show_device_management: bool,
    pub show_device_group_management: bool,
    pub show_department_management: bool,
    pub show_department_accounting_report: bool,
    pub show_user_accounting_report: bool,
    pub show_print_tracking_report: bool,
    pub show_report_generation: bool,
}

impl NavigationState {
    pub fn all_open() -> Self {
        Self {
            show_user_management: true,
            show_advanced_user_management: true,
            show_device_management: true,
            show_device_group_management: true,
            show_department_management: true,
            show_department_accounting_report: true,
            show_user_accounting_report: true,
            show_print_tracking_report: true,
            show_report_generation: true,
        }
    }

    pub fn flag(&self, page: Page) -> bool {
        match page {
            Page::UserManagement => self.show_user_management,
            Page::DeviceManagement => self.show_device_management,
            Page::DeviceGroupManagement => self.show_device_group_management,
            Page::DepartmentManagement => self.show_department_management,
            Page::DepartmentAccountingReport => self.show_department_accounting_report,
            Page::UserAccountingReport => self.show_user_accounting_report,
            Page::PrintTrackingReport => self.show_print_tracking_report,
            Page::ReportGeneration => self.show_report_generation,
        }
    }

    pub fn flag_mut(&mut self, page: Page) -> &mut bool {
        match page {
            Page::UserManagement => &mut self.show_user_management,
            Page::DeviceManagement => &mut self.show_device_management,
            Page::DeviceGroupManagement => &mut self.show_device_group_management,
            Page::DepartmentManagement => &mut self.show_department_management,
            Page::DepartmentAccountingReport => &mut self.show_department_accounting_report,
            Page::UserAccountingReport => &mut self.show_user_accounting_report,
            Page::PrintTrackingReport => &mut self.show_print_tracking_report,
            Page::ReportGeneration => &mut self.show_report_generation,
        }
    }
}
