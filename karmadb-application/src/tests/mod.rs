pub mod prelude {

    pub use karmadb_core::{
        entities::*,
        repositories::*,
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::prelude as flows;

    pub const ADMIN: &str = "admin";

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub admin: User,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            karmadb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let admin = flows::create_user(
                &db_connections,
                usecases::NewUser {
                    username: ADMIN.into(),
                    password: "secret".into(),
                    role: Role::Admin,
                },
            )
            .unwrap();
            Self {
                db_connections,
                admin,
            }
        }

        pub fn create_staff(&self, username: &str) -> User {
            flows::create_user(
                &self.db_connections,
                usecases::NewUser {
                    username: username.into(),
                    password: "secret".into(),
                    role: Role::Staff,
                },
            )
            .unwrap()
        }

        pub fn create_student(&self, school_id: &str, name: &str) -> Student {
            flows::create_student(
                &self.db_connections,
                ADMIN,
                usecases::NewStudent {
                    school_id: school_id.into(),
                    name: name.into(),
                    faculty: "Engineering".into(),
                    programme: "Computer Science".into(),
                },
            )
            .unwrap()
        }

        pub fn create_review(&self, staff: &User, student: &Student, rating: u8) -> Review {
            flows::create_review(
                &self.db_connections,
                &staff.username,
                usecases::NewReview {
                    student_id: student.id.to_string(),
                    text: "Attentive and reliable".into(),
                    rating,
                },
            )
            .unwrap()
        }

        pub fn try_get_user(&self, id: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user(id)
                .unwrap()
        }

        pub fn try_get_student(&self, id: &str) -> Option<Student> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_student(id)
                .unwrap()
        }

        pub fn try_get_review(&self, id: &str) -> Option<Review> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_review(id)
                .unwrap()
        }

        pub fn try_get_vote(&self, staff: &User, review: &Review) -> Option<Vote> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_vote(staff.id.as_str(), review.id.as_str())
                .unwrap()
        }

        pub fn count_votes(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_votes()
                .unwrap()
        }

        pub fn review_karma(&self, review: &Review) -> Karma {
            usecases::review_karma(
                &self.db_connections.shared().unwrap(),
                review.id.as_str(),
            )
            .unwrap()
        }

        pub fn student_karma(&self, student: &Student) -> Karma {
            usecases::student_karma(
                &self.db_connections.shared().unwrap(),
                student.id.as_str(),
            )
            .unwrap()
        }
    }
}
