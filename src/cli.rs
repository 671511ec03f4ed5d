use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use karmadb_application::prelude as flows;
use karmadb_core::{
    entities::{Role, User},
    usecases,
};
use karmadb_db_sqlite::Connections;

use crate::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "karmadb", version, about = "Peer-reviewed karma for students")]
pub struct Args {
    /// Configuration file (defaults to karmadb.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Create or migrate the database and exit
    Init,
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    Student {
        #[command(subcommand)]
        command: StudentCommand,
    },
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },
    /// Upvote or downvote a review on behalf of a staff member
    Vote {
        review_id: String,
        staff_username: String,
        action: String,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    Create {
        username: String,
        password: String,
        #[arg(long, default_value = "staff")]
        role: Role,
    },
    List,
}

#[derive(Subcommand)]
enum StudentCommand {
    Create {
        school_id: String,
        name: String,
        programme: String,
        faculty: String,
    },
    List,
}

#[derive(Subcommand)]
enum ReviewCommand {
    Create {
        /// Either the id or the school id of the student
        student_id: String,
        staff_username: String,
        text: String,
        rating: u8,
    },
    List,
}

pub async fn run(args: Args) -> Result<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config)?;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    karmadb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = karmadb_webserver::Cfg {
                token_valid_for: cfg.auth.token_valid_for,
            };
            karmadb_webserver::run(connections, cfg.webserver.enable_cors, web_cfg, VERSION).await;
        }
        Command::Init => {
            log::info!("Database is up to date");
        }
        Command::User { command } => user(&connections, command)?,
        Command::Student { command } => student(&connections, command)?,
        Command::Review { command } => review(&connections, command)?,
        Command::Vote {
            review_id,
            staff_username,
            action,
        } => {
            let staff = usecases::get_user_by_username(&connections.shared()?, &staff_username)?;
            let resolution =
                flows::resolve_vote(&connections, &review_id, staff.id.as_str(), &action)?;
            let karma = usecases::review_karma(&connections.shared()?, &review_id)?;
            println!("{:?} => karma {karma}", resolution.applied);
        }
    }
    Ok(())
}

fn user(connections: &Connections, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::Create {
            username,
            password,
            role,
        } => {
            let user = flows::create_user(
                connections,
                usecases::NewUser {
                    username,
                    password,
                    role,
                },
            )?;
            println!("{}", user.id);
        }
        UserCommand::List => {
            for u in usecases::all_users(&connections.shared()?)? {
                println!("{}\t{}\t{}", u.id, u.username, u.role);
            }
        }
    }
    Ok(())
}

// Students can only be managed by admins, the CLI acts on
// behalf of the first one it finds.
fn any_admin(connections: &Connections) -> Result<User> {
    usecases::users_with_role(&connections.shared()?, Role::Admin)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No admin account found, create one with 'user create --role admin'"))
}

fn student(connections: &Connections, command: StudentCommand) -> Result<()> {
    match command {
        StudentCommand::Create {
            school_id,
            name,
            programme,
            faculty,
        } => {
            let admin = any_admin(connections)?;
            let student = flows::create_student(
                connections,
                &admin.username,
                usecases::NewStudent {
                    school_id,
                    name,
                    faculty,
                    programme,
                },
            )?;
            println!("{}", student.id);
        }
        StudentCommand::List => {
            for s in usecases::load_all_scored_students(&connections.shared()?)? {
                let usecases::ScoredStudent { student, karma } = s;
                println!(
                    "{}\t{}\t{}\t{karma}",
                    student.id, student.school_id, student.name
                );
            }
        }
    }
    Ok(())
}

fn review(connections: &Connections, command: ReviewCommand) -> Result<()> {
    match command {
        ReviewCommand::Create {
            student_id,
            staff_username,
            text,
            rating,
        } => {
            let review = flows::create_review(
                connections,
                &staff_username,
                usecases::NewReview {
                    student_id,
                    text,
                    rating,
                },
            )?;
            println!("{}", review.id);
        }
        ReviewCommand::List => {
            for r in usecases::load_all_scored_reviews(&connections.shared()?)? {
                let usecases::ScoredReview {
                    review,
                    tally,
                    karma,
                } = r;
                println!(
                    "{}\t{}\t{}\t+{}/-{}\t{karma}",
                    review.id,
                    review.student_id,
                    u8::from(review.rating),
                    tally.upvotes,
                    tally.downvotes
                );
            }
        }
    }
    Ok(())
}
