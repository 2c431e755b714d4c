// File: src/pages.rs
// Purpose: Field tables for the signup and sign-in pages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::schema::{ChoiceOption, FieldSpec, Flow, FormSchema, Rule, StepSpec};

/// Every page that hosts a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Donor,
    Ngo,
    Campaigner,
    Admin,
    SignIn,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Donor,
        PageKind::Ngo,
        PageKind::Campaigner,
        PageKind::Admin,
        PageKind::SignIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Donor => "donor",
            PageKind::Ngo => "ngo",
            PageKind::Campaigner => "campaigner",
            PageKind::Admin => "admin",
            PageKind::SignIn => "sign-in",
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            PageKind::Donor => &DONOR,
            PageKind::Ngo => &NGO,
            PageKind::Campaigner => &CAMPAIGNER,
            PageKind::Admin => &ADMIN,
            PageKind::SignIn => &SIGN_IN,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownPage(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// Shared fields
// -----------------------------------------------------------------------------

const TERMS: FieldSpec =
    FieldSpec::flag("agreeTerms", "I agree to the Terms of Service and Privacy Policy").gate();
const EMAIL: FieldSpec = FieldSpec::text("email", "Email Address", Rule::Email);
const PASSWORD: FieldSpec = FieldSpec::secret("password", "Password", Rule::Password);
const CONFIRM_PASSWORD: FieldSpec = FieldSpec::secret(
    "confirmPassword",
    "Confirm Password",
    Rule::ConfirmPassword {
        password_field: "password",
    },
);
const CITY: FieldSpec = FieldSpec::text("city", "City", Rule::Required { label: "City" });

pub const STATES: &[ChoiceOption] = &[
    ChoiceOption::new("rajasthan", "Rajasthan"),
    ChoiceOption::new("delhi", "Delhi"),
    ChoiceOption::new("maharashtra", "Maharashtra"),
    ChoiceOption::new("karnataka", "Karnataka"),
];

pub const ID_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new("aadhar", "Aadhar Card"),
    ChoiceOption::new("voter", "Voter ID"),
    ChoiceOption::new("passport", "Passport"),
    ChoiceOption::new("driving", "Driving License"),
];

pub const ACCOUNT_TYPES: &[ChoiceOption] = &[
    ChoiceOption::new("donor", "Individual Supporter"),
    ChoiceOption::new("ngo", "NGO Organization"),
    ChoiceOption::new("campaigner", "Individual Fundraiser"),
    ChoiceOption::new("admin", "Admin"),
];

// -----------------------------------------------------------------------------
// Donor
// -----------------------------------------------------------------------------

static DONOR_FIELDS: [FieldSpec; 7] = [
    FieldSpec::text("fullName", "Full Name", Rule::Name),
    EMAIL,
    FieldSpec::text("phone", "Phone Number", Rule::Phone)
        .optional()
        .with_hint("Optional but useful for SMS alerts"),
    PASSWORD,
    CONFIRM_PASSWORD,
    FieldSpec::text("panCard", "PAN Card Number", Rule::Pan)
        .optional()
        .with_hint("Optional - For tax exemption benefits"),
    TERMS,
];

static DONOR_STEPS: [StepSpec; 1] = [StepSpec {
    title: "Individual Supporter",
    fields: &DONOR_FIELDS,
}];

pub static DONOR: FormSchema = FormSchema {
    page: PageKind::Donor,
    title: "Individual Supporter",
    subtitle: "Join to donate and track your contributions",
    submit_label: "Create Donor Account",
    flow: Flow::Single,
    steps: &DONOR_STEPS,
    shared: &[],
};

// -----------------------------------------------------------------------------
// NGO (three step wizard)
// -----------------------------------------------------------------------------

static NGO_BASIC: [FieldSpec; 5] = [
    FieldSpec::text("ngoName", "NGO Name", Rule::Name),
    EMAIL,
    FieldSpec::text("phone", "Phone Number", Rule::Phone)
        .optional()
        .with_hint("Optional but builds trust"),
    PASSWORD,
    CONFIRM_PASSWORD,
];

static NGO_LOCATION: [FieldSpec; 3] = [
    FieldSpec::choice("state", "State", STATES, "").required_choice("State"),
    CITY,
    FieldSpec::text("website", "Website/Social Media Link", Rule::Website)
        .optional()
        .with_hint("Optional - Builds credibility"),
];

static NGO_DOCUMENTS: [FieldSpec; 4] = [
    FieldSpec::text(
        "registrationNumber",
        "NGO Registration Number",
        Rule::Required {
            label: "Registration Number",
        },
    ),
    FieldSpec::file("certificate", "Upload NGO Certificate (PDF/JPEG)", true),
    FieldSpec::text("panTan", "PAN/TAN Number", Rule::Pan)
        .optional()
        .with_hint("Optional - For financial transparency"),
    TERMS,
];

static NGO_STEPS: [StepSpec; 3] = [
    StepSpec {
        title: "Basic Information",
        fields: &NGO_BASIC,
    },
    StepSpec {
        title: "Location & Contact",
        fields: &NGO_LOCATION,
    },
    StepSpec {
        title: "Verification Documents",
        fields: &NGO_DOCUMENTS,
    },
];

pub static NGO: FormSchema = FormSchema {
    page: PageKind::Ngo,
    title: "NGO Registration",
    subtitle: "Join our verified NGO directory",
    submit_label: "Create NGO Account",
    flow: Flow::Wizard,
    steps: &NGO_STEPS,
    shared: &[],
};

// -----------------------------------------------------------------------------
// Individual fundraiser
// -----------------------------------------------------------------------------

static CAMPAIGNER_FIELDS: [FieldSpec; 11] = [
    FieldSpec::text("fullName", "Full Name", Rule::Name),
    EMAIL,
    FieldSpec::text("phone", "Phone Number", Rule::RequiredPhone)
        .with_hint("Required for trust and OTP verification"),
    CITY,
    FieldSpec::text("state", "State", Rule::Required { label: "State" }),
    PASSWORD,
    CONFIRM_PASSWORD,
    FieldSpec::text("panNumber", "PAN Number", Rule::RequiredPan)
        .with_hint("Required for fund withdrawal and tax compliance"),
    FieldSpec::choice("idType", "Government ID Type", ID_TYPES, "").required_choice("ID Type"),
    FieldSpec::file("govtId", "Upload Government ID", true),
    TERMS,
];

static CAMPAIGNER_STEPS: [StepSpec; 1] = [StepSpec {
    title: "Individual Fundraiser",
    fields: &CAMPAIGNER_FIELDS,
}];

pub static CAMPAIGNER: FormSchema = FormSchema {
    page: PageKind::Campaigner,
    title: "Individual Fundraiser",
    subtitle: "Start fundraisers and help others in need",
    submit_label: "Create Campaigner Account",
    flow: Flow::Single,
    steps: &CAMPAIGNER_STEPS,
    shared: &[],
};

// -----------------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------------

static ADMIN_FIELDS: [FieldSpec; 5] = [
    FieldSpec::secret("accessCode", "Access Code", Rule::AccessCode)
        .with_hint("Special code required for admin registration"),
    EMAIL,
    PASSWORD.with_hint("Use a strong password with at least 12 characters"),
    CONFIRM_PASSWORD,
    FieldSpec::flag("enable2FA", "Enable Two-Factor Authentication (Recommended)"),
];

static ADMIN_STEPS: [StepSpec; 1] = [StepSpec {
    title: "Admin Access",
    fields: &ADMIN_FIELDS,
}];

pub static ADMIN: FormSchema = FormSchema {
    page: PageKind::Admin,
    title: "Admin Access",
    subtitle: "High-security access for website management",
    submit_label: "Create Admin Account",
    flow: Flow::Single,
    steps: &ADMIN_STEPS,
    shared: &[],
};

// -----------------------------------------------------------------------------
// Sign in (email + password, or phone for an OTP)
// -----------------------------------------------------------------------------

static SIGN_IN_SHARED: [FieldSpec; 1] = [FieldSpec::choice(
    "userType",
    "Account Type",
    ACCOUNT_TYPES,
    "donor",
)];

static SIGN_IN_EMAIL: [FieldSpec; 2] = [EMAIL, PASSWORD];

static SIGN_IN_OTP: [FieldSpec; 1] = [FieldSpec::text("phone", "Phone Number", Rule::RequiredPhone)
    .with_hint("We'll send you an OTP to verify")];

static SIGN_IN_STEPS: [StepSpec; 2] = [
    StepSpec {
        title: "email",
        fields: &SIGN_IN_EMAIL,
    },
    StepSpec {
        title: "otp",
        fields: &SIGN_IN_OTP,
    },
];

pub static SIGN_IN: FormSchema = FormSchema {
    page: PageKind::SignIn,
    title: "Sign In",
    subtitle: "Welcome back! Please sign in to your account",
    submit_label: "Sign In",
    flow: Flow::Alternatives,
    steps: &SIGN_IN_STEPS,
    shared: &SIGN_IN_SHARED,
};
