use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary key of a row in the `people` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person as encountered in an export. Identity is the `(name, email)`
/// pair; affiliation and country only matter for the first encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub country: Option<String>,
}

impl NewPerson {
    /// A person known only by name and email, as in review exports.
    pub fn bare(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            affiliation: String::new(),
            country: None,
        }
    }
}

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub affiliation: String,
    pub country: Option<String>,
}

/// Columns shared by submissions and revisions.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperFields {
    pub id: i64,
    pub title: String,
    pub abstract_text: String,
    pub track_name: String,
    pub primary_subject_area: String,
    pub secondary_subject_areas: String,
    pub conflicts: i64,
    pub assigned: i64,
    pub completed: f64,
    pub bids: i64,
    pub discussion: String,
    pub status: String,
    pub embargo_agreement: String,
    pub conflict_agreement: String,
    pub category: String,
    pub authors_agreement: String,
    pub availability: String,
    pub primary_author: PersonId,
}

/// An original submission. Its link to a revision lives on the revision row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub paper: PaperFields,
}

/// A revised paper, optionally pointing back at the submission it revises.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRevision {
    pub paper: PaperFields,
    pub submission_id: Option<i64>,
}

/// Selects between the submission and revision table families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperKind {
    Submission,
    Revision,
}

impl PaperKind {
    pub fn paper_table(self) -> &'static str {
        match self {
            PaperKind::Submission => "submission",
            PaperKind::Revision => "revision",
        }
    }

    /// Name of the foreign key column pointing at the paper table.
    pub fn paper_column(self) -> &'static str {
        match self {
            PaperKind::Submission => "submission_id",
            PaperKind::Revision => "revision_id",
        }
    }

    pub fn people_table(self) -> &'static str {
        match self {
            PaperKind::Submission => "submission_people",
            PaperKind::Revision => "revision_people",
        }
    }

    pub fn seniormetareview_table(self) -> &'static str {
        match self {
            PaperKind::Submission => "submission_seniormetareview",
            PaperKind::Revision => "revision_seniormetareview",
        }
    }
}

impl fmt::Display for PaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.paper_table())
    }
}

/// Role a person plays on a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaperRole {
    Author,
    Reviewer,
    Metareviewer,
    Seniormetareviewer,
}

impl PaperRole {
    pub const ALL: [PaperRole; 4] = [
        PaperRole::Author,
        PaperRole::Reviewer,
        PaperRole::Metareviewer,
        PaperRole::Seniormetareviewer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaperRole::Author => "AUTHOR",
            PaperRole::Reviewer => "REVIEWER",
            PaperRole::Metareviewer => "METAREVIEWER",
            PaperRole::Seniormetareviewer => "SENIORMETAREVIEWER",
        }
    }
}

impl fmt::Display for PaperRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a role join table: `person` holds `role` on a paper at the
/// given zero-based `position` of that role's listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleAssignment {
    pub role: PaperRole,
    pub position: i64,
    pub person: PersonId,
}

/// Workflow states of an original submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Accept,
    MinorRevision,
    MajorRevision,
    Reject,
    DeskReject,
    Withdrawn,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Accept => "Accept",
            SubmissionStatus::MinorRevision => "Minor revision",
            SubmissionStatus::MajorRevision => "Major revision",
            SubmissionStatus::Reject => "Reject",
            SubmissionStatus::DeskReject => "Desk Reject",
            SubmissionStatus::Withdrawn => "Withdrawn",
        }
    }
}

/// Workflow states of a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionStatus {
    Accept,
    AwaitingDecision,
    Reject,
}

impl RevisionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RevisionStatus::Accept => "Accept",
            RevisionStatus::AwaitingDecision => "Awaiting Decision",
            RevisionStatus::Reject => "Reject",
        }
    }
}

/// Answers of a reviewer on an original submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionReview {
    pub submission_id: i64,
    pub overall_rating: String,
    pub relevance: String,
    pub revision_possible: String,
    pub paper_flavor: String,
    pub summary: String,
    pub strengths: String,
    pub weaknesses: String,
    pub novelty: String,
    pub significance: String,
    pub technical_depth: String,
    pub experiments: String,
    pub presentation: String,
    pub details: String,
    pub reproducibility: String,
    pub revision_items: String,
    pub confidence: String,
    pub confidential_comments: String,
    pub external_reviewer: String,
    pub trainee_agreement: String,
}

/// Answers of a reviewer on a revision.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevisionReview {
    pub revision_id: i64,
    pub recommendation: String,
    pub revision_addressed: String,
    pub justification: String,
    pub comments_authors: String,
    pub confidential_comments: String,
}

/// Meta-reviewer summary on an original submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionMetareview {
    pub submission_id: i64,
    pub overall_rating: String,
    pub summary: String,
    pub revision_items: String,
}

/// Meta-reviewer summary on a revision.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevisionMetareview {
    pub revision_id: i64,
    pub overall_rating: String,
    pub comments: String,
}
