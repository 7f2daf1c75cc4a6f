use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn user(id: i64, name: &str, role: Role, status: bool) -> User {
    User {
        id,
        full_name: name.to_owned(),
        email: format!("u{id}@sena.edu.co"),
        job_title: Some("Instructor".to_owned()),
        role,
        status,
        institution_name: Some("Centro de Diseño".to_owned()),
    }
}

fn loaded() -> UsersState {
    let mut state = UsersState::default();
    state.list.finish_load(vec![
        user(1, "Ana Gómez", Role::AdminInstitution, true),
        user(2, "Luis Pérez", Role::User, true),
        user(3, "Eva Ruiz", Role::User, false),
    ]);
    state.refresh(today());
    state
}

fn ids(state: &UsersState) -> Vec<i64> {
    state.list.filtered.iter().map(|u| u.id).collect()
}

#[test]
fn role_and_status_filters() {
    let mut state = loaded();
    state.filter.role = Some(Role::User);
    state.refresh(today());
    assert_eq!(ids(&state), vec![2, 3]);
    state.filter.status = Some(false);
    state.refresh(today());
    assert_eq!(ids(&state), vec![3]);
}

#[test]
fn search_covers_email() {
    let mut state = loaded();
    state.filter.search = SearchTerm::new("U2@SENA");
    state.refresh(today());
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn stats_active_inactive() {
    let values: Vec<usize> = loaded().stats().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![3, 2, 1]);
}

#[test]
fn form_round_trips_user() {
    let u = user(2, "Luis Pérez", Role::User, true);
    let form = UserForm::from_user(&u);
    assert_eq!(form.id, Some(2));
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.email, "u2@sena.edu.co");
    assert_eq!(payload.job_title.as_deref(), Some("Instructor"));
    assert_eq!(payload.role, Role::User);
}

#[test]
fn form_validation_messages() {
    let mut form = UserForm::default();
    assert_eq!(form.to_payload().unwrap_err().to_string(), "Ingrese el nombre completo");
    form.full_name = "Ana".to_owned();
    form.email = "ana@sena".to_owned();
    assert_eq!(form.to_payload().unwrap_err().to_string(), "Ingrese un correo electrónico válido");
    form.email = " Ana@SENA.edu.co ".to_owned();
    assert_eq!(form.to_payload().unwrap_err().to_string(), "Seleccione un rol");
    form.role = Some(Role::Warehouse);
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.email, "ana@sena.edu.co");
    assert_eq!(payload.job_title, None);
}

#[test]
fn unknown_role_is_not_prefilled() {
    let form = UserForm::from_user(&user(9, "X", Role::Unknown, true));
    assert_eq!(form.role, None);
}

#[test]
fn email_validation() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a b@c.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a@b..co"));
}
