use constcat::concat;

mod components;
mod landing;
mod toast;
mod variables;

pub use components::BASE_COMPONENTS;
pub use landing::LANDING_STYLES;
pub use toast::TOAST;
pub use variables::CSS_VARIABLES;

// Modern style bundling
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
r#"
/* Header and navigation */
.site-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 50;
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.site-header.shadow-md {
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo-text {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.menu-toggle {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.menu-toggle:hover {
  color: var(--text-primary);
}

.mobile-menu {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  padding: var(--space-2) var(--space-2) var(--space-3);
  border-top: 1px solid var(--border);
}

@media (min-width: 768px) {
  .mobile-menu {
    display: none;
  }
}

.mobile-link {
  display: block;
  width: 100%;
  text-align: left;
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1rem;
  padding: var(--space-2) var(--space-3);
  color: var(--text-secondary);
}

.mobile-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.mobile-login {
  color: var(--primary);
  font-weight: 600;
}

.section-heading {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}

.section-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.not-found {
  padding: var(--space-20) 0;
  text-align: center;
}

.not-found .btn {
  margin-top: var(--space-8);
}
"#
);
