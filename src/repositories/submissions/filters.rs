use sqlx::postgres::PgArguments;
use sqlx::Arguments;

use crate::db::types::{LectureType, SubmissionStatus};

/// Optional listing criteria. Every present filter contributes exactly one
/// conjunctive clause; absent filters contribute nothing.
#[derive(Debug, Clone, Default)]
pub(crate) struct SubmissionFilters {
    pub(crate) course_id: Option<String>,
    pub(crate) assignment_id: Option<String>,
    pub(crate) status: Option<SubmissionStatus>,
    pub(crate) is_late: Option<bool>,
    pub(crate) student_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum FilterValue {
    Text(String),
    Flag(bool),
    Status(SubmissionStatus),
    Kind(LectureType),
}

/// An ordered list of predicate clauses with matching bind values. The same
/// predicate feeds the COUNT and the SELECT so both agree on which rows match.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Predicate {
    clauses: Vec<String>,
    values: Vec<FilterValue>,
}

impl SubmissionFilters {
    pub(crate) fn predicate(&self) -> Predicate {
        let mut predicate = Predicate::default();
        // Fixed scope: only submissions against assignment-type lectures.
        predicate.push_eq("l.type", FilterValue::Kind(LectureType::Assignment));

        if let Some(course_id) = &self.course_id {
            predicate.push_eq("c.id", FilterValue::Text(course_id.clone()));
        }
        if let Some(assignment_id) = &self.assignment_id {
            predicate.push_eq("s.lecture_id", FilterValue::Text(assignment_id.clone()));
        }
        if let Some(status) = self.status {
            predicate.push_eq("s.status", FilterValue::Status(status));
        }
        if let Some(is_late) = self.is_late {
            predicate.push_eq("s.is_late", FilterValue::Flag(is_late));
        }
        if let Some(email) = &self.student_email {
            predicate.push_ilike("u.email", format!("%{email}%"));
        }

        predicate
    }
}

impl Predicate {
    fn push_eq(&mut self, column: &str, value: FilterValue) {
        let placeholder = self.values.len() + 1;
        self.clauses.push(format!("{column} = ${placeholder}"));
        self.values.push(value);
    }

    fn push_ilike(&mut self, column: &str, pattern: String) {
        let placeholder = self.values.len() + 1;
        self.clauses.push(format!("{column} ILIKE ${placeholder}"));
        self.values.push(FilterValue::Text(pattern));
    }

    pub(crate) fn where_clause(&self) -> String {
        format!("WHERE {}", self.clauses.join(" AND "))
    }

    /// The next free positional placeholder, for LIMIT/OFFSET binds appended
    /// after the filter values.
    pub(crate) fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// The filter values encoded in clause order. Callers may append their own
    /// trailing arguments (LIMIT/OFFSET, aggregate parameters).
    pub(crate) fn arguments(&self) -> Result<PgArguments, sqlx::Error> {
        let mut arguments = PgArguments::default();
        for value in &self.values {
            let encoded = match value {
                FilterValue::Text(text) => arguments.add(text.as_str()),
                FilterValue::Flag(flag) => arguments.add(*flag),
                FilterValue::Status(status) => arguments.add(*status),
                FilterValue::Kind(kind) => arguments.add(*kind),
            };
            encoded.map_err(sqlx::Error::Encode)?;
        }
        Ok(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_keep_only_the_assignment_scope() {
        let predicate = SubmissionFilters::default().predicate();
        assert_eq!(predicate.where_clause(), "WHERE l.type = $1");
        assert_eq!(predicate.next_placeholder(), 2);
    }

    #[test]
    fn every_filter_contributes_one_clause_in_declaration_order() {
        let filters = SubmissionFilters {
            course_id: Some("course-1".to_string()),
            assignment_id: Some("lecture-9".to_string()),
            status: Some(SubmissionStatus::Submitted),
            is_late: Some(true),
            student_email: Some("alice".to_string()),
        };

        let predicate = filters.predicate();
        assert_eq!(
            predicate.where_clause(),
            "WHERE l.type = $1 AND c.id = $2 AND s.lecture_id = $3 \
             AND s.status = $4 AND s.is_late = $5 AND u.email ILIKE $6"
        );
        assert_eq!(predicate.next_placeholder(), 7);
    }

    #[test]
    fn email_search_is_wrapped_as_substring_pattern() {
        let filters = SubmissionFilters {
            student_email: Some("bob@example".to_string()),
            ..SubmissionFilters::default()
        };

        let predicate = filters.predicate();
        assert!(predicate.values.contains(&FilterValue::Text("%bob@example%".to_string())));
    }

    #[test]
    fn same_filters_build_the_same_predicate_for_count_and_fetch() {
        let filters = SubmissionFilters {
            course_id: Some("course-1".to_string()),
            is_late: Some(false),
            ..SubmissionFilters::default()
        };

        assert_eq!(filters.predicate(), filters.predicate());
    }

    #[test]
    fn skipped_filters_do_not_burn_placeholders() {
        let filters = SubmissionFilters {
            status: Some(SubmissionStatus::Graded),
            ..SubmissionFilters::default()
        };

        let predicate = filters.predicate();
        assert_eq!(predicate.where_clause(), "WHERE l.type = $1 AND s.status = $2");
        assert_eq!(predicate.next_placeholder(), 3);
    }

    #[test]
    fn every_filter_value_encodes() {
        let filters = SubmissionFilters {
            course_id: Some("course-1".to_string()),
            assignment_id: Some("lecture-9".to_string()),
            status: Some(SubmissionStatus::Grading),
            is_late: Some(true),
            student_email: Some("alice".to_string()),
        };

        assert!(filters.predicate().arguments().is_ok());
    }
}
