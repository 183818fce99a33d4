pub const TOAST: &str = r#"
.toast-viewport {
  position: fixed;
  right: 0;
  bottom: 0;
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  width: 100%;
  max-width: 420px;
  padding: var(--space-4);
  list-style: none;
}

.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-4);
  padding: var(--space-4) var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  animation: toast-in var(--transition-normal) var(--easing-standard);
}

.toast-destructive {
  border-color: var(--error);
  background-color: var(--error);
  color: var(--text-inverse);
}

.toast-title {
  font-size: 0.875rem;
  font-weight: 600;
}

.toast-description {
  font-size: 0.875rem;
  opacity: 0.9;
}

.toast-close {
  background: none;
  border: none;
  cursor: pointer;
  color: inherit;
  opacity: 0.6;
}

.toast-close:hover {
  opacity: 1;
}

@keyframes toast-in {
  from { transform: translateY(100%); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}
"#;
