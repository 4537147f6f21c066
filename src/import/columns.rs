//! Header titles used by the platform's exports.

pub const PAPER_ID: &str = "Paper ID";

pub mod people {
    pub const FIRST_NAME: &str = "First Name";
    pub const MIDDLE_INITIAL: &str = "Middle Initial (optional)";
    pub const LAST_NAME: &str = "Last Name";
    pub const EMAIL: &str = "E-mail";
    pub const ORGANIZATION: &str = "Organization";
    pub const COUNTRY: &str = "Country";
}

pub mod papers {
    pub const TITLE: &str = "Paper Title";
    pub const ABSTRACT: &str = "Abstract";
    pub const PRIMARY_AUTHOR_NAME: &str = "Primary Contact Author Name";
    pub const PRIMARY_AUTHOR_EMAIL: &str = "Primary Contact Author Email";
    pub const TRACK_NAME: &str = "Track Name";
    pub const PRIMARY_SUBJECT_AREA: &str = "Primary Subject Area";
    pub const SECONDARY_SUBJECT_AREAS: &str = "Secondary Subject Areas";
    pub const CONFLICTS: &str = "Conflicts";
    pub const ASSIGNED: &str = "Assigned";
    pub const COMPLETED: &str = "% Completed";
    pub const BIDS: &str = "Bids";
    pub const DISCUSSION: &str = "Discussion";
    pub const STATUS: &str = "Status";
    pub const EMBARGO_AGREEMENT: &str = "Q1 (PVLDB does not allow papers previously rejected from PVLDB to be resubmitted within 12 months of the original submission date.)";
    pub const CONFLICT_AGREEMENT: &str = "Q3 (Conflict)";
    pub const CATEGORY: &str = "Q4 (Special category)";
    pub const AUTHORS_AGREEMENT: &str = "Q7 (Authors)";
    pub const AVAILABILITY: &str = "Q8 (Availability and Reproducibility)";
    pub const AUTHORS: &str = "Authors";
    pub const AUTHOR_EMAILS: &str = "Author Emails";
    pub const REVIEWERS: &str = "Reviewers";
    pub const REVIEWER_EMAILS: &str = "Reviewer Emails";
    pub const METAREVIEWERS: &str = "MetaReviewers";
    pub const METAREVIEWER_EMAILS: &str = "MetaReviewer Emails";
    pub const SENIORMETAREVIEWERS: &str = "SeniorMetaReviewers";
    pub const SENIORMETAREVIEWER_EMAILS: &str = "SeniorMetaReviewerEmails";
}

pub mod reviews {
    pub const REVIEWER_NAME: &str = "Reviewer Name";
    pub const REVIEWER_EMAIL: &str = "Reviewer Email";

    pub const OVERALL_RATING: &str = "Q1 (Overall Rating)";
    pub const RELEVANCE: &str = "Q2 (Relevant for PVLDB)";
    pub const REVISION_POSSIBLE: &str =
        "Q3 (Are there specific revisions that could raise your overall rating?)";
    pub const PAPER_FLAVOR: &str = "Q4 (Flavor of Regular Research Paper. Please indicate which flavor or flavors best describe the paper.)";
    pub const SUMMARY: &str = "Q5 (Summary of the paper (what is being proposed and in what context) and a brief justification of your overall recommendation. One solid paragraph.)";
    pub const STRENGTHS: &str = "Q6 (Three (or more) strong points about the paper. Please be precise and explicit; clearly explain the value and nature of the contribution.)";
    pub const WEAKNESSES: &str = "Q7 (Three (or more) weak points about the paper. Please clearly indicate whether the paper has any mistakes, missing related work, or results that cannot be considered a contribution; write it so that the authors can understand what is seen as negative.)";
    pub const NOVELTY: &str = "Q8 (Novelty. Please give a high novelty ranking to papers on new topics, opening new fields, or proposing truly new ideas; assign medium ratings to delta papers and papers on well-known topics but still with some valuable contribution.)";
    pub const SIGNIFICANCE: &str = "Q9 (Significance)";
    pub const TECHNICAL_DEPTH: &str = "Q10 (Technical Depth and Quality of Content)";
    pub const EXPERIMENTS: &str = "Q11 (Experiments)";
    pub const PRESENTATION: &str = "Q12 (Presentation)";
    pub const DETAILS: &str = "Q13 (Detailed Evaluation (Contribution, Pros/Cons, Errors); please number each point and please provide as constructive feedback as possible.)";
    pub const REPRODUCIBILITY: &str = "Q14 (Supplemental material. If the authors have provided supplemental material (data, code, etc.,), is the information likely to be sufficient to understand and to reproduce the experiments? Note that we do not expect actual reproducibility experiments, but rather a verification that the files are in fact there and are reasonable in scope and content.)";
    /// Later title of the reproducibility question; renamed to
    /// [`REPRODUCIBILITY`] on load.
    pub const REPRODUCIBILITY_RETITLED: &str = "Q14 (Reproducibility. If the authors have provided supplemental material (data, code, etc.), is the information likely to be sufficient to understand and to reproduce the experiments? Otherwise, do the authors provide sufficient technical details in the paper to support reproducibility? Note that we do not expect actual reproducibility experiments, but rather a verification that the material is reasonable in scope and content.)";
    pub const REVISION_ITEMS: &str = "Q15 (Revision. If revision is required, list specific required revisions you seek from the authors. Please number each point.)";
    pub const CONFIDENCE: &str = "Q16 (Rate your confidence in this review.)";
    pub const CONFIDENTIAL_COMMENTS: &str = "Q17 (Confidential comments for the PC Chairs. Please add any information that may help us reach a decision.)";
    pub const EXTERNAL_REVIEWER: &str =
        "Q18 (Name and affiliation of external expert (!) reviewer (if applicable).)";
    pub const TRAINEE_AGREEMENT: &str = "Q19 (I understand that I am allowed to discuss a paper submission with a trainee for the purpose of teaching them how to review papers. I understand that (a) I am responsible to ensure that there is no COI according to the rules published at PVLDB.org between the trainee and any of the authors of the paper. (b) I have informed the trainee about the confidentiality of the content of the paper. (c) I am solely responsible for the final review. [If the trainee contributed significantly to the paper review, please list them above as external reviewer].)";

    pub const REVISION_RECOMMENDATION: &str = "Q1 (Final and Overall Recommendation)";
    pub const REVISION_ADDRESSED: &str = "Q3 (Did the authors satisfactorily address the revision requirements identified in the meta-review of the original submission?)";
    pub const REVISION_JUSTIFICATION: &str =
        "Q5 (Justify your answer to the above question by briefly addressing key revision items.)";
    pub const REVISION_COMMENTS_AUTHORS: &str =
        "Q6 (Additional comments to the authors on the revised version of the paper)";
    pub const REVISION_CONFIDENTIAL_COMMENTS: &str = "Q18 (Confidential Comments for the PC Chairs. Please add any information that may help us reach a decision.)";
}

pub mod metareviews {
    pub const REVIEWER_NAME: &str = "Meta-Reviewer Name";
    pub const REVIEWER_EMAIL: &str = "Meta-Reviewer Email";
    pub const OVERALL_RATING: &str = "Q1 (Overall Rating)";
    pub const SUMMARY: &str = "Q2 (Summary Comments)";
    pub const REVISION_ITEMS: &str = "Q3 (Revision Items)";
    pub const REVISION_COMMENTS: &str = "Q2 (Detailed Comments)";
}

/// No senior meta-review export has been seen; these headers follow the
/// meta-review export's naming and may need adjusting.
pub mod seniormetareviews {
    pub const REVIEWER_NAME: &str = "Senior Meta-Reviewer Name";
    pub const REVIEWER_EMAIL: &str = "Senior Meta-Reviewer Email";
}

pub mod mapping {
    pub const REVISION_ID: &str = "Revision ID";
    pub const ORIGINAL_SUBMISSION_ID: &str = "OriginalSubmission ID";
}
