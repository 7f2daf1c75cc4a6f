use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct Recorder(RefCell<Vec<(ToastKind, String)>>);

impl Notifier for Recorder {
    fn toast(&self, kind: ToastKind, message: &str) {
        self.0.borrow_mut().push((kind, message.to_owned()));
    }
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "uno");
    let b = state.push(ToastKind::Info, "dos");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..7 {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE);
    assert_eq!(state.toasts[0].message, "t2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "ok");
    state.push(ToastKind::Error, "fallo");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}

#[test]
fn api_error_prefixes_context() {
    let recorder = Recorder::default();
    recorder.api_error("Error al cargar préstamos", &ApiError::NotFound);
    assert_eq!(
        recorder.0.borrow()[0],
        (ToastKind::Error, "Error al cargar préstamos: Recurso no encontrado.".to_owned())
    );
}

#[test]
fn validation_errors_are_warnings() {
    let recorder = Recorder::default();
    recorder.api_error("Préstamo", &ApiError::validation("Seleccione el responsable del préstamo"));
    assert_eq!(recorder.0.borrow()[0].0, ToastKind::Warning);
}

#[test]
fn info_uses_info_kind() {
    let recorder = Recorder::default();
    recorder.info("Se eliminó un préstamo duplicado");
    assert_eq!(recorder.0.borrow()[0], (ToastKind::Info, "Se eliminó un préstamo duplicado".to_owned()));
}

#[test]
fn signal_notifier_pushes_into_state() {
    let toasts = RwSignal::new(ToastState::default());
    toasts.success("Usuario creado");
    toasts.info("Se eliminó un préstamo duplicado");
    let kinds: Vec<ToastKind> = toasts.get_untracked().toasts.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Info]);
}
