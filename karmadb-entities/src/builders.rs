pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, student_builder::*, user_builder::*, vote_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let id = Id::new();
            UserBuild {
                user: User {
                    username: format!("staff-{}", &id.as_str()[..8]),
                    id,
                    password: Password::from(String::new()),
                    role: Role::Staff,
                },
            }
        }
    }
}

pub mod student_builder {

    use super::*;
    use crate::{id::*, student::*};

    #[derive(Debug)]
    pub struct StudentBuild {
        student: Student,
    }

    impl StudentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.student.id = id.into();
            self
        }
        pub fn school_id(mut self, school_id: &str) -> Self {
            self.student.school_id = school_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.student.name = name.into();
            self
        }
        pub fn faculty(mut self, faculty: &str) -> Self {
            self.student.faculty = faculty.into();
            self
        }
        pub fn programme(mut self, programme: &str) -> Self {
            self.student.programme = programme.into();
            self
        }
        pub fn finish(self) -> Student {
            self.student
        }
    }

    impl Builder for Student {
        type Build = StudentBuild;
        fn build() -> StudentBuild {
            let id = Id::new();
            StudentBuild {
                student: Student {
                    school_id: id.as_str()[..10].to_string(),
                    id,
                    name: "Jane Doe".into(),
                    faculty: "Science and Technology".into(),
                    programme: "Computer Science".into(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn staff_id(mut self, staff_id: &str) -> Self {
            self.review.staff_id = staff_id.into();
            self
        }
        pub fn student_id(mut self, student_id: &str) -> Self {
            self.review.student_id = student_id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.review.text = text.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    staff_id: Id::new(),
                    student_id: Id::new(),
                    created_at: Timestamp::now(),
                    text: "Attentive and reliable".into(),
                    rating: ReviewRating::neutral(),
                },
            }
        }
    }
}

pub mod vote_builder {

    use super::*;
    use crate::{id::*, time::*, vote::*};

    #[derive(Debug)]
    pub struct VoteBuild {
        vote: Vote,
    }

    impl VoteBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.vote.id = id.into();
            self
        }
        pub fn staff_id(mut self, staff_id: &str) -> Self {
            self.vote.staff_id = staff_id.into();
            self
        }
        pub fn review_id(mut self, review_id: &str) -> Self {
            self.vote.review_id = review_id.into();
            self
        }
        pub fn polarity(mut self, polarity: Polarity) -> Self {
            self.vote.polarity = polarity;
            self
        }
        pub fn finish(self) -> Vote {
            self.vote
        }
    }

    impl Builder for Vote {
        type Build = VoteBuild;
        fn build() -> VoteBuild {
            VoteBuild {
                vote: Vote {
                    id: Id::new(),
                    staff_id: Id::new(),
                    review_id: Id::new(),
                    polarity: Polarity::Upvote,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{review::*, student::*, user::*, vote::*};

    #[test]
    fn build_review() {
        let r = Review::build()
            .id("r1")
            .staff_id("s1")
            .student_id("st1")
            .rating(7)
            .finish();
        assert_eq!("r1", r.id.as_str());
        assert_eq!("s1", r.staff_id.as_str());
        assert_eq!("st1", r.student_id.as_str());
        assert_eq!(ReviewRating::from(7), r.rating);
    }

    #[test]
    fn build_student_with_distinct_school_ids() {
        let a = Student::build().finish();
        let b = Student::build().finish();
        assert_ne!(a.school_id, b.school_id);
        assert_eq!("x", Student::build().school_id("x").finish().school_id);
    }

    #[test]
    fn build_user_and_vote() {
        let u = User::build().username("alice").role(Role::Admin).finish();
        assert_eq!("alice", u.username);
        assert!(u.is_admin());
        let v = Vote::build().polarity(Polarity::Downvote).finish();
        assert_eq!(Polarity::Downvote, v.polarity);
    }
}
