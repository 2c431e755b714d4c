use daan_forms::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const PASSWORD: &str = "Str0ng!Pass";

fn fill(form: &mut FormController, values: &[(&str, &str)]) {
    for (field, value) in values {
        form.set_value(field, *value).unwrap();
    }
}

fn valid_donor() -> FormController {
    let mut form = FormController::new(PageKind::Donor);
    fill(
        &mut form,
        &[
            ("fullName", "Asha Verma"),
            ("email", "asha@example.org"),
            ("password", PASSWORD),
            ("confirmPassword", PASSWORD),
        ],
    );
    form
}

#[test]
fn test_donor_submit_blocked_until_terms_agreed() {
    let mut form = valid_donor();
    assert!(!form.compute_form_valid());
    assert_eq!(form.submit().unwrap(), None);
    assert!(!form.state().has_errors());

    form.set_value("agreeTerms", true).unwrap();
    assert!(form.compute_form_valid());

    let submission = form.submit().unwrap().expect("form accepted");
    assert_eq!(submission.page, PageKind::Donor);
    assert_eq!(submission.step, None);
    assert_eq!(submission.text("email"), "asha@example.org");
    assert!(submission.flag("agreeTerms"));
    assert_eq!(submission.optional_text("phone"), None);
}

#[test]
fn test_empty_submit_touches_only_validated_fields() {
    let mut form = FormController::new(PageKind::Donor);
    assert_eq!(form.submit().unwrap(), None);

    let touched: Vec<&str> = form.state().touched().iter().map(String::as_str).collect();
    assert_eq!(
        touched,
        vec!["confirmPassword", "email", "fullName", "panCard", "password", "phone"]
    );

    let state = form.state();
    assert_eq!(state.error("fullName"), Some("Name is required"));
    assert_eq!(state.error("email"), Some("Email is required"));
    assert_eq!(state.error("password"), Some("Password is required"));
    assert_eq!(state.error("confirmPassword"), Some("Please confirm your password"));
    assert_eq!(state.error("phone"), None);
    assert_eq!(state.error("panCard"), None);
    assert_eq!(state.error("agreeTerms"), None);
}

#[test]
fn test_invalid_optional_value_blocks_form() {
    let mut form = valid_donor();
    form.set_value("agreeTerms", true).unwrap();
    form.set_value("phone", "12345").unwrap();
    form.mark_touched("phone").unwrap();

    assert_eq!(
        form.state().error("phone"),
        Some("Please enter a valid 10-digit mobile number")
    );
    assert!(!form.compute_form_valid());

    form.set_value("phone", "").unwrap();
    assert!(form.compute_form_valid());
}

#[test]
fn test_compute_form_valid_is_pure() {
    let mut form = valid_donor();
    form.set_value("email", "nope").unwrap();
    let before = form.state().clone();

    let first = form.compute_form_valid();
    let second = form.compute_form_valid();

    assert_eq!(first, second);
    assert_eq!(form.state(), &before);
}

#[test]
fn test_repeated_blur_is_stable() {
    let mut form = FormController::new(PageKind::Campaigner);
    form.set_value("panNumber", "ABCDE1234").unwrap();

    form.mark_touched("panNumber").unwrap();
    let once = form.state().clone();
    form.mark_touched("panNumber").unwrap();

    assert_eq!(form.state(), &once);
    assert_eq!(
        once.error("panNumber"),
        Some("Please enter a valid PAN number (e.g., ABCDE1234F)")
    );
}

#[test]
fn test_touched_never_shrinks() {
    let mut form = FormController::new(PageKind::Admin);
    let events = vec![
        FormEvent::blur("email"),
        FormEvent::set_value("email", "a@b.co"),
        FormEvent::blur("accessCode"),
        FormEvent::Submit,
        FormEvent::set_value("accessCode", "abcdef"),
        FormEvent::Back,
    ];

    let mut previous = form.state().touched().clone();
    for event in events {
        form.dispatch(event).unwrap();
        let current = form.state().touched().clone();
        assert!(previous.is_subset(&current));
        previous = current;
    }
}

#[test]
fn test_same_events_same_state() {
    let events = vec![
        FormEvent::set_value("fullName", "A"),
        FormEvent::blur("fullName"),
        FormEvent::set_value("email", "asha@example.org"),
        FormEvent::Submit,
    ];

    let run = || {
        let mut form = FormController::new(PageKind::Donor);
        for event in events.clone() {
            form.dispatch(event).unwrap();
        }
        form.state().clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_ngo_wizard_walks_forward_and_back() {
    let mut form = FormController::new(PageKind::Ngo);

    // Step 1 blocks while empty
    assert_eq!(form.submit().unwrap(), None);
    assert_eq!(form.state().active_step(), 0);
    assert_eq!(form.state().error("ngoName"), Some("Name is required"));

    fill(
        &mut form,
        &[
            ("ngoName", "Seva Trust"),
            ("email", "contact@seva.org"),
            ("password", PASSWORD),
            ("confirmPassword", PASSWORD),
        ],
    );
    assert_eq!(form.submit().unwrap(), None);
    assert_eq!(form.state().active_step(), 1);
    assert_eq!(form.active_step().title, "Location & Contact");

    // Step 2 needs a state
    form.set_value("city", "Jaipur").unwrap();
    form.submit().unwrap();
    assert_eq!(form.state().active_step(), 1);
    assert_eq!(form.state().error("state"), Some("State is required"));

    form.set_value("state", "rajasthan").unwrap();
    form.submit().unwrap();
    assert_eq!(form.state().active_step(), 2);

    // Back keeps entered values
    assert_eq!(form.back().unwrap(), None);
    assert_eq!(form.state().active_step(), 1);
    assert_eq!(form.state().text("city"), "Jaipur");
    form.submit().unwrap();
    assert_eq!(form.state().active_step(), 2);

    form.set_value("registrationNumber", "NGO/2024/001").unwrap();
    form.set_value(
        "certificate",
        FileMeta::new("certificate.pdf", "application/pdf", 200 * 1024),
    )
    .unwrap();
    assert!(!form.compute_form_valid());
    form.set_value("agreeTerms", true).unwrap();
    assert!(form.compute_form_valid());

    let submission = form.submit().unwrap().expect("ngo accepted");
    assert_eq!(submission.page, PageKind::Ngo);
    assert_eq!(submission.text("ngoName"), "Seva Trust");
    assert_eq!(submission.text("state"), "rajasthan");
}

#[test]
fn test_ngo_back_from_first_step_leaves_page() {
    let mut form = FormController::new(PageKind::Ngo);
    assert_eq!(form.back().unwrap(), Some(Route::Home));
    assert_eq!(form.state().active_step(), 0);
}

#[test]
fn test_sign_in_methods_submit_separately() {
    let mut form = FormController::new(PageKind::SignIn);
    fill(&mut form, &[("email", "asha@example.org"), ("password", PASSWORD)]);

    let submission = form.submit().unwrap().expect("email sign-in");
    assert_eq!(submission.step, Some("email"));
    assert_eq!(submission.text("userType"), "donor");

    // Switching method does not validate anything
    form.select_step(1).unwrap();
    assert_eq!(form.state().error("phone"), None);
    assert!(!form.compute_form_valid());

    assert_eq!(form.submit().unwrap(), None);
    assert_eq!(form.state().error("phone"), Some("Phone number is required"));

    form.set_value("phone", "9876543210").unwrap();
    form.set_value("userType", "ngo").unwrap();
    let submission = form.submit().unwrap().expect("otp sign-in");
    assert_eq!(submission.step, Some("otp"));
    assert_eq!(submission.text("userType"), "ngo");
}

#[test]
fn test_campaigner_requires_identity_documents() {
    let mut form = FormController::new(PageKind::Campaigner);
    fill(
        &mut form,
        &[
            ("fullName", "Ravi Kumar"),
            ("email", "ravi@example.org"),
            ("phone", "9123456780"),
            ("city", "Pune"),
            ("state", "Maharashtra"),
            ("password", PASSWORD),
            ("confirmPassword", PASSWORD),
            ("panNumber", "ABCDE1234F"),
            ("idType", "passport"),
        ],
    );
    form.set_value("agreeTerms", true).unwrap();

    assert_eq!(form.submit().unwrap(), None);
    assert_eq!(form.state().error("govtId"), Some("Please upload a file"));

    form.set_value("govtId", FileMeta::new("id.gif", "image/gif", 1024))
        .unwrap();
    assert_eq!(
        form.state().error("govtId"),
        Some("Please upload a valid file (JPG, PNG, or PDF)")
    );

    form.set_value("govtId", FileMeta::new("id.png", "image/png", 1024))
        .unwrap();
    assert!(form.submit().unwrap().is_some());
}

#[test]
fn test_admin_two_factor_is_optional() {
    let mut form = FormController::new(PageKind::Admin);
    fill(
        &mut form,
        &[
            ("accessCode", "letmein"),
            ("email", "ops@daan.org"),
            ("password", PASSWORD),
            ("confirmPassword", PASSWORD),
        ],
    );
    let submission = form.submit().unwrap().expect("admin accepted");
    assert!(!submission.flag("enable2FA"));
}

#[rstest]
#[case(PageKind::Donor, "Create Donor Account")]
#[case(PageKind::Ngo, "Next")]
#[case(PageKind::Campaigner, "Create Campaigner Account")]
#[case(PageKind::Admin, "Create Admin Account")]
#[case(PageKind::SignIn, "Sign In")]
fn test_rendered_primary_button(#[case] page: PageKind, #[case] label: &str) {
    let form = FormController::new(page);
    let html = render_form(form.schema(), form.state()).into_string();
    assert!(html.contains(&format!("{}</button>", label)), "{}", html);
}

#[test]
fn test_rendering_hides_secrets_and_flags_errors() {
    let mut form = valid_donor();
    form.set_value("email", "broken").unwrap();
    form.mark_touched("email").unwrap();

    let html = render_form(form.schema(), form.state()).into_string();
    assert!(!html.contains(PASSWORD));
    assert!(html.contains(r#"value="broken""#));
    assert!(html.contains(r#"aria-invalid="true""#));
    assert!(html.contains("Please enter a valid email address"));
}
