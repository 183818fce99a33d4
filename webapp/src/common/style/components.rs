pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  text-decoration: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-800);
  color: white;
}

.btn-secondary:hover {
  background-color: var(--neutral-700);
}

.btn-light {
  background-color: white;
  color: var(--primary);
}

.btn-light:hover {
  background-color: var(--neutral-100);
}

.btn-sm {
  padding: var(--space-2) var(--space-4);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

.link-button {
  background: none;
  border: none;
  padding: 0;
  font: inherit;
  color: inherit;
  cursor: pointer;
}

.icon-before {
  margin-right: var(--space-2);
}

.icon-after {
  margin-left: var(--space-2);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-md);
  overflow: hidden;
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

/* Form Elements */
.form-field {
  margin-bottom: var(--space-6);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-primary);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--neutral-300);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.2);
  outline: none;
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.container-narrow {
  max-width: var(--container-narrow);
}

@media (min-width: 768px) {
  .mobile-only {
    display: none;
  }
}

@media (max-width: 767px) {
  .desktop-only {
    display: none !important;
  }
}

/* Table styles */
.table-wrapper {
  width: 100%;
  overflow-x: auto;
}

table {
  width: 100%;
  border-collapse: collapse;
}

thead tr {
  background-color: var(--primary);
  color: white;
}

th {
  padding: var(--space-4);
  text-align: center;
  font-weight: 600;
}

th:first-child {
  text-align: left;
}

tbody tr:nth-child(even) {
  background-color: var(--neutral-50);
}

td {
  padding: var(--space-4);
  text-align: center;
  border-bottom: 1px solid var(--border);
}
"#;
