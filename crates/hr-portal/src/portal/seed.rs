//! The standard demo dataset: the state the portal boots with so the server,
//! CLI demo, and tests share realistic fixtures.

use chrono::NaiveDate;

use super::domain::{
    Announcement, AnnouncementCategory, AnnouncementPriority, Employee, EmployeeStatus, JobListing,
    JobStatus, JobType, LeaveRequest, LeaveStatus, LeaveType,
};
use super::stats::{DashboardBreakdowns, DepartmentCount, MonthlyLeaveCount};
use super::store::EntityStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn avatar(id: &str) -> Option<String> {
    Some(format!("https://i.pravatar.cc/150?u={id}"))
}

/// Build the standard entity store. Seed ids are fixed so the demo and the
/// documentation can reference them.
pub fn standard_store() -> EntityStore {
    let mut store = EntityStore::new();

    for employee in standard_employees() {
        store
            .employees
            .insert(employee)
            .expect("seed employee ids are unique");
    }
    for request in standard_leave_requests() {
        store
            .leave_requests
            .insert(request)
            .expect("seed leave ids are unique");
    }
    for announcement in standard_announcements() {
        store
            .announcements
            .insert(announcement)
            .expect("seed announcement ids are unique");
    }
    for listing in standard_job_listings() {
        store
            .job_listings
            .insert(listing)
            .expect("seed job ids are unique");
    }

    store
}

fn standard_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "e001".to_string(),
            name: "John Doe".to_string(),
            position: "Software Developer".to_string(),
            department: "Engineering".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            status: EmployeeStatus::Active,
            image_url: avatar("e001"),
            start_date: date(2021, 3, 15),
            manager: None,
        },
        Employee {
            id: "e002".to_string(),
            name: "Jane Smith".to_string(),
            position: "HR Manager".to_string(),
            department: "Human Resources".to_string(),
            email: "jane.smith@company.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            status: EmployeeStatus::Active,
            image_url: avatar("e002"),
            start_date: date(2019, 11, 1),
            manager: None,
        },
        Employee {
            id: "e003".to_string(),
            name: "Michael Johnson".to_string(),
            position: "Marketing Specialist".to_string(),
            department: "Marketing".to_string(),
            email: "michael.johnson@company.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            status: EmployeeStatus::OnLeave,
            image_url: avatar("e003"),
            start_date: date(2020, 6, 22),
            manager: None,
        },
        Employee {
            id: "e004".to_string(),
            name: "Emily Davis".to_string(),
            position: "Product Manager".to_string(),
            department: "Product".to_string(),
            email: "emily.davis@company.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            status: EmployeeStatus::Active,
            image_url: avatar("e004"),
            start_date: date(2018, 9, 10),
            manager: None,
        },
        Employee {
            id: "e005".to_string(),
            name: "Robert Brown".to_string(),
            position: "Finance Analyst".to_string(),
            department: "Finance".to_string(),
            email: "robert.brown@company.com".to_string(),
            phone: "(555) 876-5432".to_string(),
            status: EmployeeStatus::Active,
            image_url: avatar("e005"),
            start_date: date(2022, 1, 15),
            manager: None,
        },
    ]
}

fn standard_leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "l001".to_string(),
            employee_id: "e001".to_string(),
            employee_name: "John Doe".to_string(),
            leave_type: LeaveType::Annual,
            status: LeaveStatus::Approved,
            start_date: date(2023, 6, 15),
            end_date: date(2023, 6, 20),
            reason: Some("Family vacation".to_string()),
            approver: Some("Jane Smith".to_string()),
            approved_date: Some(date(2023, 5, 25)),
            submitted_on: None,
        },
        LeaveRequest {
            id: "l002".to_string(),
            employee_id: "e003".to_string(),
            employee_name: "Michael Johnson".to_string(),
            leave_type: LeaveType::Sick,
            status: LeaveStatus::Approved,
            start_date: date(2023, 5, 10),
            end_date: date(2023, 5, 15),
            reason: Some("Flu recovery".to_string()),
            approver: Some("Jane Smith".to_string()),
            approved_date: Some(date(2023, 5, 10)),
            submitted_on: None,
        },
        LeaveRequest {
            id: "l003".to_string(),
            employee_id: "e002".to_string(),
            employee_name: "Jane Smith".to_string(),
            leave_type: LeaveType::Personal,
            status: LeaveStatus::Pending,
            start_date: date(2023, 7, 5),
            end_date: date(2023, 7, 6),
            reason: Some("Personal appointment".to_string()),
            approver: None,
            approved_date: None,
            submitted_on: None,
        },
        LeaveRequest {
            id: "l004".to_string(),
            employee_id: "e004".to_string(),
            employee_name: "Emily Davis".to_string(),
            leave_type: LeaveType::Annual,
            status: LeaveStatus::Pending,
            start_date: date(2023, 8, 1),
            end_date: date(2023, 8, 15),
            reason: Some("Summer holiday".to_string()),
            approver: None,
            approved_date: None,
            submitted_on: None,
        },
        LeaveRequest {
            id: "l005".to_string(),
            employee_id: "e005".to_string(),
            employee_name: "Robert Brown".to_string(),
            leave_type: LeaveType::Sick,
            status: LeaveStatus::Rejected,
            start_date: date(2023, 4, 18),
            end_date: date(2023, 4, 19),
            reason: Some("Doctor's appointment".to_string()),
            approver: Some("Jane Smith".to_string()),
            approved_date: Some(date(2023, 4, 17)),
            submitted_on: None,
        },
    ]
}

fn standard_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "a001".to_string(),
            title: "Company Summer Party".to_string(),
            content: "Please join us for the annual summer party on July 15th at Central Park. \
                      Food and drinks will be provided. Family members are welcome!"
                .to_string(),
            date: date(2023, 6, 1),
            author: "HR Team".to_string(),
            priority: AnnouncementPriority::Medium,
            category: AnnouncementCategory::Event,
        },
        Announcement {
            id: "a002".to_string(),
            title: "New Health Insurance Policy".to_string(),
            content: "We're pleased to announce our new improved health insurance policy that \
                      will take effect from August 1st. Details have been sent to your email."
                .to_string(),
            date: date(2023, 6, 15),
            author: "Benefits Team".to_string(),
            priority: AnnouncementPriority::High,
            category: AnnouncementCategory::Policy,
        },
        Announcement {
            id: "a003".to_string(),
            title: "IT System Maintenance".to_string(),
            content: "Our IT systems will be undergoing maintenance this weekend (June 24-25). \
                      Please save your work and log out before leaving on Friday."
                .to_string(),
            date: date(2023, 6, 20),
            author: "IT Department".to_string(),
            priority: AnnouncementPriority::High,
            category: AnnouncementCategory::It,
        },
        Announcement {
            id: "a004".to_string(),
            title: "New Product Launch Success".to_string(),
            content: "Congratulations to everyone involved in the successful launch of our new \
                      product line! We've exceeded our sales targets by 25%!"
                .to_string(),
            date: date(2023, 6, 10),
            author: "Executive Team".to_string(),
            priority: AnnouncementPriority::Medium,
            category: AnnouncementCategory::General,
        },
        Announcement {
            id: "a005".to_string(),
            title: "Office Recycling Program".to_string(),
            content: "We're launching a new recycling initiative in the office. New bins will be \
                      placed throughout the building. Please review the attached guidelines."
                .to_string(),
            date: date(2023, 5, 28),
            author: "Facilities Management".to_string(),
            priority: AnnouncementPriority::Low,
            category: AnnouncementCategory::General,
        },
    ]
}

fn standard_job_listings() -> Vec<JobListing> {
    vec![
        JobListing {
            id: "j001".to_string(),
            title: "Senior Frontend Developer".to_string(),
            department: "Engineering".to_string(),
            location: "New York, NY (Hybrid)".to_string(),
            job_type: JobType::FullTime,
            status: JobStatus::Open,
            posted_date: date(2023, 6, 1),
            applicants: 12,
            description: "We are seeking a skilled Senior Frontend Developer to join our growing \
                          engineering team to build innovative web applications."
                .to_string(),
            requirements: vec![
                "5+ years of experience with React, Vue, or Angular".to_string(),
                "Strong understanding of JavaScript, HTML, and CSS".to_string(),
                "Experience with responsive design and cross-browser compatibility".to_string(),
                "Familiarity with REST APIs and modern frontend build tools".to_string(),
            ],
        },
        JobListing {
            id: "j002".to_string(),
            title: "HR Coordinator".to_string(),
            department: "Human Resources".to_string(),
            location: "Chicago, IL (On-site)".to_string(),
            job_type: JobType::FullTime,
            status: JobStatus::Open,
            posted_date: date(2023, 6, 10),
            applicants: 8,
            description: "Join our Human Resources team as an HR Coordinator to support various \
                          HR functions and employee engagement initiatives."
                .to_string(),
            requirements: vec![
                "Bachelor's degree in Human Resources or related field".to_string(),
                "2+ years of HR administrative experience".to_string(),
                "Familiarity with HRIS systems".to_string(),
                "Excellent communication and interpersonal skills".to_string(),
            ],
        },
        JobListing {
            id: "j003".to_string(),
            title: "Marketing Intern".to_string(),
            department: "Marketing".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Internship,
            status: JobStatus::Open,
            posted_date: date(2023, 6, 15),
            applicants: 24,
            description: "Excellent opportunity for marketing students to gain hands-on \
                          experience in digital marketing campaigns and social media management."
                .to_string(),
            requirements: vec![
                "Currently enrolled in a Bachelor's program in Marketing or related field"
                    .to_string(),
                "Strong writing skills and creativity".to_string(),
                "Familiarity with social media platforms".to_string(),
                "Ability to commit 20 hours per week".to_string(),
            ],
        },
        JobListing {
            id: "j004".to_string(),
            title: "Data Analyst".to_string(),
            department: "Analytics".to_string(),
            location: "Boston, MA (Hybrid)".to_string(),
            job_type: JobType::FullTime,
            status: JobStatus::OnHold,
            posted_date: date(2023, 5, 20),
            applicants: 19,
            description: "We're looking for a detail-oriented Data Analyst to help us transform \
                          data into insights that drive business decisions."
                .to_string(),
            requirements: vec![
                "Bachelor's degree in Statistics, Computer Science, or related field".to_string(),
                "2+ years experience with data analysis tools (SQL, Excel, Tableau)".to_string(),
                "Experience with statistical analysis and data visualization".to_string(),
                "Strong problem-solving skills and attention to detail".to_string(),
            ],
        },
        JobListing {
            id: "j005".to_string(),
            title: "Customer Support Representative".to_string(),
            department: "Customer Service".to_string(),
            location: "Dallas, TX (On-site)".to_string(),
            job_type: JobType::PartTime,
            status: JobStatus::Closed,
            posted_date: date(2023, 5, 15),
            applicants: 31,
            description: "Join our customer support team to help provide excellent service to \
                          our customers via phone, email, and chat."
                .to_string(),
            requirements: vec![
                "High school diploma or equivalent".to_string(),
                "1+ years of customer service experience".to_string(),
                "Excellent communication and problem-solving skills".to_string(),
                "Ability to work evenings and weekends".to_string(),
            ],
        },
    ]
}

/// The curated breakdown tables shipped alongside the live collections.
pub fn standard_breakdowns() -> DashboardBreakdowns {
    let department = |department: &str, count: u32| DepartmentCount {
        department: department.to_string(),
        count,
    };
    let month = |month: &str, count: u32| MonthlyLeaveCount {
        month: month.to_string(),
        count,
    };

    DashboardBreakdowns {
        department_distribution: vec![
            department("Engineering", 45),
            department("Marketing", 22),
            department("Sales", 38),
            department("Finance", 18),
            department("HR", 12),
            department("Operations", 21),
        ],
        leaves_by_month: vec![
            month("Jan", 14),
            month("Feb", 16),
            month("Mar", 19),
            month("Apr", 21),
            month("May", 25),
            month("Jun", 30),
            month("Jul", 0),
            month("Aug", 0),
            month("Sep", 0),
            month("Oct", 0),
            month("Nov", 0),
            month("Dec", 0),
        ],
    }
}
