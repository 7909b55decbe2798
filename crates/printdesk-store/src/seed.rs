//! Demo mailbox and notification feed shown until a real backend exists.
//!
//! Timestamps are offsets from `now` so the header renders "2 hours ago"
//! style labels regardless of when the app starts.

use chrono::{DateTime, Duration, Utc};
use printdesk_core::{EmailRecord, EmailStatus, NotificationKind, NotificationRecord, Priority};

struct EmailSeed {
    id: u64,
    from: &'static str,
    from_name: &'static str,
    to: &'static str,
    subject: &'static str,
    content: &'static str,
    is_read: bool,
    priority: Priority,
    age: Duration,
    attachments: &'static [&'static str],
    status: EmailStatus,
}

struct NotificationSeed {
    id: u64,
    kind: NotificationKind,
    title: &'static str,
    content: &'static str,
    is_read: bool,
    priority: Priority,
    age: Duration,
    category: &'static str,
}

pub fn seed_emails(now: DateTime<Utc>) -> Vec<EmailRecord> {
    let seeds = [
        EmailSeed {
            id: 1,
            from: "admin@company.com",
            from_name: "System Administrator",
            to: "user@company.com",
            subject: "System Maintenance Notice",
            content: "Dear Colleagues,\n\nThe system will undergo routine maintenance this Saturday from 2:00-4:00 AM, which may affect normal usage.\n\nMaintenance content:\n\u{2022} Database optimization and upgrade\n\u{2022} Security patch update\n\u{2022} Performance tuning\n\nPlease prepare in advance, we apologize for any inconvenience caused.\n\nTechnical Support Team",
            is_read: false,
            priority: Priority::High,
            age: Duration::hours(2),
            attachments: &["Maintenance Plan.pdf", "Rollback Plan.docx"],
            status: EmailStatus::Inbox,
        },
        EmailSeed {
            id: 2,
            from: "hr@company.com",
            from_name: "Human Resources",
            to: "user@company.com",
            subject: "Notice on Office Hours Adjustment",
            content: "Dear Colleagues,\n\nEffective next Monday, office hours will be adjusted to:\nMorning: 9:00-12:00\nAfternoon: 13:30-18:00\n\nPlease be informed and inform each other.\n\nHuman Resources Department",
            is_read: true,
            priority: Priority::Normal,
            age: Duration::hours(24),
            attachments: &[],
            status: EmailStatus::Inbox,
        },
        EmailSeed {
            id: 3,
            from: "it@company.com",
            from_name: "IT Department",
            to: "colleague@company.com",
            subject: "Network Security Reminder",
            content: "Dear Colleagues,\n\nRecently, multiple phishing email attacks have been detected. Please note:\n1. Do not click on unknown links\n2. Do not download suspicious attachments\n3. Update antivirus software in a timely manner\n\nPlease contact the IT department immediately if any abnormalities are found.\n\nIT Support Team",
            is_read: false,
            priority: Priority::High,
            age: Duration::hours(3),
            attachments: &["Security Manual.pdf"],
            status: EmailStatus::Sent,
        },
        EmailSeed {
            id: 4,
            from: "finance@company.com",
            from_name: "Finance Department",
            to: "user@company.com",
            subject: "Monthly Expense Reimbursement Reminder",
            content: "Dear Colleagues,\n\nThe deadline for this month's expense reimbursement is the 5th of next month. Please submit the relevant documents in a timely manner.\n\nReimbursement process:\n1. Fill in the electronic reimbursement form\n2. Department manager review\n3. Finance department review\n4. Financial director approval\n\nIf you have any questions, please contact Xiao Wang from the Finance Department.\n\nFinance Department",
            is_read: true,
            priority: Priority::Normal,
            age: Duration::hours(48),
            attachments: &[],
            status: EmailStatus::Inbox,
        },
        EmailSeed {
            id: 5,
            from: "marketing@company.com",
            from_name: "Marketing Department",
            to: "all@company.com",
            subject: "New Product Launch Notice",
            content: "Dear Colleagues,\n\nWe will hold a new product launch in the multifunctional hall at 2:00 PM next Wednesday. Please attend on time.\n\nLaunch process:\n\u{2022} Product introduction\n\u{2022} Demo session\n\u{2022} Q&A interaction\n\nPlease ask department heads to organize employees to attend.\n\nMarketing Department",
            is_read: true,
            priority: Priority::High,
            age: Duration::hours(72),
            attachments: &["Launch Agenda.pdf"],
            status: EmailStatus::Sent,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| EmailRecord {
            id: seed.id,
            from: seed.from.to_string(),
            from_name: seed.from_name.to_string(),
            to: seed.to.to_string(),
            subject: seed.subject.to_string(),
            content: seed.content.to_string(),
            is_read: seed.is_read,
            priority: seed.priority,
            created_at: now - seed.age,
            attachments: seed.attachments.iter().map(ToString::to_string).collect(),
            status: seed.status,
        })
        .collect()
}

pub fn seed_notifications(now: DateTime<Utc>) -> Vec<NotificationRecord> {
    let seeds = [
        NotificationSeed {
            id: 1,
            kind: NotificationKind::System,
            title: "System Update Notification",
            content: "The system will undergo routine maintenance tonight from 22:00-23:00, which may affect normal usage. Please prepare in advance",
            is_read: false,
            priority: Priority::High,
            age: Duration::minutes(30),
            category: "System Maintenance",
        },
        NotificationSeed {
            id: 2,
            kind: NotificationKind::Print,
            title: "Print Job Completed",
            content: "Your document \"Q3 Quarterly Report.pdf\" has been printed on a Laser Printer, total 12 pages",
            is_read: false,
            priority: Priority::Normal,
            age: Duration::minutes(15),
            category: "Print Jobs",
        },
        NotificationSeed {
            id: 3,
            kind: NotificationKind::Device,
            title: "Device Status Warning",
            content: "Printer ink cartridge level is below 20%, please replace consumables in time",
            is_read: true,
            priority: Priority::Medium,
            age: Duration::hours(2),
            category: "Device Status",
        },
        NotificationSeed {
            id: 4,
            kind: NotificationKind::Quota,
            title: "Print Quota Reminder",
            content: "You have used 85% of your monthly print quota, 234 pages remaining. Please use it reasonably",
            is_read: false,
            priority: Priority::Medium,
            age: Duration::hours(4),
            category: "Quota Management",
        },
        NotificationSeed {
            id: 5,
            kind: NotificationKind::Security,
            title: "Security Alert",
            content: "Abnormal login behavior detected, IP address 192.168.1.100 attempted to access the system. Please confirm if this is your operation",
            is_read: true,
            priority: Priority::High,
            age: Duration::hours(24),
            category: "Security Alerts",
        },
        NotificationSeed {
            id: 6,
            kind: NotificationKind::System,
            title: "New Feature Launch",
            content: "Batch printing function has been added to the print management system, supporting one-time processing of multiple documents. Welcome to experience",
            is_read: false,
            priority: Priority::Normal,
            age: Duration::hours(6),
            category: "Feature Updates",
        },
        NotificationSeed {
            id: 7,
            kind: NotificationKind::Print,
            title: "Print Job Failed",
            content: "Your document \"Contract Template.docx\" printing failed. Error reason: Paper size mismatch. Please check printer settings",
            is_read: false,
            priority: Priority::High,
            age: Duration::minutes(45),
            category: "Print Jobs",
        },
        NotificationSeed {
            id: 8,
            kind: NotificationKind::Device,
            title: "Device Offline Notification",
            content: "A printer has been offline for more than 30 minutes. Please check network connection and device status",
            is_read: true,
            priority: Priority::Medium,
            age: Duration::hours(3),
            category: "Device Status",
        },
        NotificationSeed {
            id: 9,
            kind: NotificationKind::Quota,
            title: "Quota About to Run Out",
            content: "Your monthly print quota has only 56 pages left. It is recommended to apply for an increase or optimize print settings",
            is_read: false,
            priority: Priority::High,
            age: Duration::hours(8),
            category: "Quota Management",
        },
        NotificationSeed {
            id: 10,
            kind: NotificationKind::Security,
            title: "Password About to Expire",
            content: "Your system password will expire in 7 days. Please change your password in time to ensure account security",
            is_read: true,
            priority: Priority::Medium,
            age: Duration::hours(12),
            category: "Security Alerts",
        },
        NotificationSeed {
            id: 11,
            kind: NotificationKind::System,
            title: "Data Backup Completed",
            content: "Today's data backup task has been successfully completed, all important data has been safely saved to the cloud",
            is_read: true,
            priority: Priority::Low,
            age: Duration::hours(1),
            category: "Data Management",
        },
        NotificationSeed {
            id: 12,
            kind: NotificationKind::Print,
            title: "Batch Printing Completed",
            content: "Your batch printing task of 50 documents has been completed, taking 15 minutes, average 3.3 pages per minute",
            is_read: false,
            priority: Priority::Normal,
            age: Duration::minutes(20),
            category: "Print Jobs",
        },
    ];

    seeds
        .into_iter()
        .map(|seed| NotificationRecord {
            id: seed.id,
            kind: seed.kind,
            title: seed.title.to_string(),
            content: seed.content.to_string(),
            is_read: seed.is_read,
            priority: seed.priority,
            created_at: now - seed.age,
            category: seed.category.to_string(),
        })
        .collect()
}
