//! Populates an empty database with a demo admin, nine employees and one
//! sample leave per employee. Safe to run repeatedly.

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_manager_backend::{
    config::Config,
    db::connection::{create_pool, run_migrations, DbPool},
    models::{
        leave::{CreateLeaveRequest, LeaveStatus, LeaveType},
        user::{NewUser, User, UserRole},
        PageWindow,
    },
    repositories::{
        LeaveFilter, LeaveRepository, LeaveRepositoryTrait, UserRepository, UserRepositoryTrait,
    },
    utils::password::hash_password,
};

const ADMIN: (&str, &str, &str) = ("rajesh_kumar", "rajesh.kumar@company.com", "admin123");
const EMPLOYEE_PASSWORD: &str = "employee123";

struct SampleLeave {
    username: &'static str,
    employee_name: &'static str,
    leave_type: LeaveType,
    from: (i32, u32, u32),
    to: (i32, u32, u32),
    reason: &'static str,
    status: LeaveStatus,
}

const SAMPLES: [SampleLeave; 9] = [
    SampleLeave {
        username: "priya_sharma",
        employee_name: "Priya Sharma",
        leave_type: LeaveType::Annual,
        from: (2024, 7, 15),
        to: (2024, 7, 19),
        reason: "Family wedding celebration in hometown",
        status: LeaveStatus::Approved,
    },
    SampleLeave {
        username: "arjun_patel",
        employee_name: "Arjun Patel",
        leave_type: LeaveType::Sick,
        from: (2024, 6, 20),
        to: (2024, 6, 22),
        reason: "Fever and cold symptoms, doctor advised rest",
        status: LeaveStatus::Approved,
    },
    SampleLeave {
        username: "kavya_reddy",
        employee_name: "Kavya Reddy",
        leave_type: LeaveType::Personal,
        from: (2024, 8, 1),
        to: (2024, 8, 3),
        reason: "House shifting and relocation work",
        status: LeaveStatus::Pending,
    },
    SampleLeave {
        username: "vikram_singh",
        employee_name: "Vikram Singh",
        leave_type: LeaveType::Emergency,
        from: (2024, 6, 10),
        to: (2024, 6, 11),
        reason: "Family emergency - father hospitalized",
        status: LeaveStatus::Rejected,
    },
    SampleLeave {
        username: "ananya_gupta",
        employee_name: "Ananya Gupta",
        leave_type: LeaveType::Annual,
        from: (2024, 9, 15),
        to: (2024, 9, 25),
        reason: "Vacation to Goa with family",
        status: LeaveStatus::Pending,
    },
    SampleLeave {
        username: "rohit_verma",
        employee_name: "Rohit Verma",
        leave_type: LeaveType::Sick,
        from: (2024, 5, 15),
        to: (2024, 5, 16),
        reason: "Medical checkup and treatment",
        status: LeaveStatus::Approved,
    },
    SampleLeave {
        username: "sneha_iyer",
        employee_name: "Sneha Iyer",
        leave_type: LeaveType::Personal,
        from: (2024, 7, 1),
        to: (2024, 7, 5),
        reason: "Sister's wedding preparations",
        status: LeaveStatus::Pending,
    },
    SampleLeave {
        username: "aditya_joshi",
        employee_name: "Aditya Joshi",
        leave_type: LeaveType::Annual,
        from: (2024, 8, 20),
        to: (2024, 8, 30),
        reason: "Trip to Kerala backwaters",
        status: LeaveStatus::Approved,
    },
    SampleLeave {
        username: "meera_nair",
        employee_name: "Meera Nair",
        leave_type: LeaveType::Maternity,
        from: (2024, 9, 1),
        to: (2024, 12, 1),
        reason: "Maternity leave for childbirth",
        status: LeaveStatus::Pending,
    },
];

fn email_for(username: &str) -> String {
    format!("{}@company.com", username.replace('_', "."))
}

fn date((y, m, d): (i32, u32, u32)) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

async fn ensure_user(
    pool: &DbPool,
    username: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> anyhow::Result<User> {
    let users = UserRepository::new();
    if let Some(existing) = users.find_by_username(pool, username).await? {
        tracing::info!(username, "User already exists");
        return Ok(existing);
    }
    if let Some(existing) = users.find_by_email(pool, email).await? {
        tracing::info!(email, "Email already registered");
        return Ok(existing);
    }

    let created = users
        .create(
            pool,
            &NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash: hash_password(password)?,
                role,
            },
        )
        .await?;
    tracing::info!(username, role = role.as_str(), "Created user");
    Ok(created)
}

async fn ensure_sample_leave(pool: &DbPool, owner: &User, sample: &SampleLeave) -> anyhow::Result<()> {
    let leaves = LeaveRepository::new();
    let filter = LeaveFilter {
        owner: Some(owner.id),
        status: None,
    };
    let (_, existing) = leaves
        .find_page(pool, filter, PageWindow::new(Some(1), Some(1)))
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let request = CreateLeaveRequest {
        employee_name: sample.employee_name.to_string(),
        leave_type: sample.leave_type,
        from_date: date(sample.from)?,
        to_date: date(sample.to)?,
        reason: sample.reason.to_string(),
    };
    let leave = leaves.create(pool, owner.id, &request).await?;
    if sample.status != LeaveStatus::Pending {
        leaves
            .update_status(pool, leave.id, LeaveStatus::Pending, sample.status)
            .await?;
    }
    tracing::info!(
        username = owner.username.as_str(),
        status = sample.status.as_str(),
        "Created sample leave"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,leave_manager_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    let (admin_name, admin_email, admin_password) = ADMIN;
    ensure_user(&pool, admin_name, admin_email, admin_password, UserRole::Admin).await?;

    for sample in &SAMPLES {
        let email = email_for(sample.username);
        let employee = ensure_user(
            &pool,
            sample.username,
            &email,
            EMPLOYEE_PASSWORD,
            UserRole::Employee,
        )
        .await?;
        ensure_sample_leave(&pool, &employee, sample).await?;
    }

    tracing::info!(
        admin = admin_email,
        employees = SAMPLES.len(),
        "Seeding complete; employees log in with password {}",
        EMPLOYEE_PASSWORD
    );
    Ok(())
}
