use crate::fixtures;
use crate::models::Course;

/// Student-side course list plus the checkout flow that feeds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    active: Vec<Course>,
    checkout: Option<Course>,
}

impl Default for Enrollment {
    fn default() -> Self {
        Self::new(fixtures::initial_enrollments())
    }
}

impl Enrollment {
    pub fn new(active: Vec<Course>) -> Self {
        Self {
            active,
            checkout: None,
        }
    }

    pub fn active(&self) -> &[Course] {
        &self.active
    }

    /// Course waiting for payment confirmation, if the checkout is open.
    pub fn checkout(&self) -> Option<&Course> {
        self.checkout.as_ref()
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout.is_some()
    }

    pub fn begin_checkout(&mut self, course: &Course) {
        log::debug!("checkout opened for {}", course.id);
        self.checkout = Some(course.clone());
    }

    pub fn cancel_checkout(&mut self) {
        self.checkout = None;
    }

    /// Confirms the open checkout: the course is appended with its progress
    /// reset. Courses already in the list are appended again.
    pub fn confirm_payment(&mut self) -> Option<Course> {
        let course = self.checkout.take()?.enrolled();
        log::debug!("enrolled in {}", course.id);
        self.active.push(course.clone());
        Some(course)
    }
}
