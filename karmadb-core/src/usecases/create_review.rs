use super::{find_students::get_student_by_id_or_school_id, prelude::*};
use crate::{
    authorization::user::authorize_role,
    util::validate::{AutoCorrect, Validate},
};

#[derive(Debug, Clone)]
pub struct NewReview {
    /// Either the id or the school id of the student
    pub student_id: String,
    pub text: String,
    pub rating: u8,
}

pub fn create_review<R>(repo: &R, account: &User, new_review: NewReview) -> Result<Review>
where
    R: StudentRepo + ReviewRepo,
{
    authorize_role(account, Role::Staff)?;
    let NewReview {
        student_id,
        text,
        rating,
    } = new_review;
    let student = get_student_by_id_or_school_id(repo, student_id.trim())?;
    let review = Review {
        id: Id::new(),
        staff_id: account.id.clone(),
        student_id: student.id,
        created_at: Timestamp::now(),
        text,
        rating: rating.into(),
    }
    .auto_correct();
    review.validate()?;
    if repo
        .try_get_review_by_staff_and_student(review.staff_id.as_str(), review.student_id.as_str())?
        .is_some()
    {
        return Err(Error::DuplicateReview);
    }
    log::debug!(
        "Creating review {} of student {} by {}",
        review.id,
        student.school_id,
        account.username
    );
    repo.create_review(&review)?;
    Ok(review)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use karmadb_entities::builders::*;

    fn setup() -> (MockDb, User, Student) {
        let db = MockDb::default();
        let staff = User::build().role(Role::Staff).finish();
        let student = Student::build().school_id("816000001").finish();
        db.create_user(&staff).unwrap();
        db.create_student(&student).unwrap();
        (db, staff, student)
    }

    fn new_review(student_id: &str, rating: u8) -> NewReview {
        NewReview {
            student_id: student_id.into(),
            text: "Always well prepared".into(),
            rating,
        }
    }

    #[test]
    fn create_review_by_school_id() {
        let (db, staff, student) = setup();
        let review = create_review(&db, &staff, new_review("816000001", 7)).unwrap();
        assert_eq!(student.id, review.student_id);
        assert_eq!(staff.id, review.staff_id);
        assert_eq!(ReviewRating::from(7), review.rating);
        assert_eq!(1, db.count_reviews().unwrap());
    }

    #[test]
    fn reject_second_review_of_same_student() {
        let (db, staff, student) = setup();
        create_review(&db, &staff, new_review(student.id.as_str(), 7)).unwrap();
        assert!(matches!(
            create_review(&db, &staff, new_review("816000001", 3)),
            Err(Error::DuplicateReview)
        ));
        let other = User::build().role(Role::Staff).finish();
        assert!(create_review(&db, &other, new_review("816000001", 3)).is_ok());
    }

    #[test]
    fn only_staff_may_review() {
        let (db, _, student) = setup();
        let admin = User::build().role(Role::Admin).finish();
        assert!(matches!(
            create_review(&db, &admin, new_review(student.id.as_str(), 7)),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn invalid_reviews() {
        let (db, staff, student) = setup();
        assert!(matches!(
            create_review(&db, &staff, new_review("unknown", 7)),
            Err(Error::UnknownStudent)
        ));
        assert!(matches!(
            create_review(&db, &staff, new_review(student.id.as_str(), 0)),
            Err(Error::RatingValue)
        ));
        assert!(matches!(
            create_review(&db, &staff, new_review(student.id.as_str(), 11)),
            Err(Error::RatingValue)
        ));
        let mut empty = new_review(student.id.as_str(), 5);
        empty.text = " \n".into();
        assert!(matches!(
            create_review(&db, &staff, empty),
            Err(Error::EmptyText)
        ));
        assert_eq!(0, db.count_reviews().unwrap());
    }
}
