pub const LANDING_STYLES: &str = r#"
/* Landing Page Styles */

.landing section {
  padding: var(--space-20) 0;
  scroll-margin-top: var(--header-height);
}

/* Hero */
.landing .hero {
  position: relative;
  overflow: hidden;
  color: white;
  text-align: center;
  background: linear-gradient(135deg, var(--primary) 0%, var(--accent) 100%);
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.2);
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  opacity: 0.2;
}

.hero .container {
  position: relative;
}

.hero-content {
  max-width: 768px;
  margin: 0 auto;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: var(--space-6);
}

.hero-brand {
  color: #FDE68A;
}

.hero-subtitle {
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  justify-content: center;
}

@media (max-width: 640px) {
  .hero-title {
    font-size: 2.5rem;
  }
}

/* Products */
.products-section {
  background-color: var(--surface);
}

.plans-grid,
.testimonials-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
}

.plan-card {
  position: relative;
  padding: var(--space-8);
  border: 1px solid var(--border);
}

.plan-popular {
  border: 2px solid var(--primary);
}

.plan-badge {
  position: absolute;
  top: var(--space-4);
  left: 50%;
  transform: translateX(-50%);
}

.plan-badge span {
  background-color: var(--primary);
  color: white;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
}

.plan-image {
  width: 100%;
  height: 192px;
  object-fit: cover;
  border-radius: var(--radius-lg);
  margin: var(--space-4) 0 var(--space-6);
}

.plan-name {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.plan-blurb {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.plan-features {
  list-style: none;
  margin-bottom: var(--space-6);
}

.plan-features li {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

.icon-included {
  color: var(--success);
}

.icon-excluded {
  color: var(--neutral-400);
}

/* Pricing */
.plan-price {
  font-size: 0.875rem;
  font-weight: 400;
  opacity: 0.9;
}

.feature-name {
  text-align: left;
  font-weight: 500;
}

.cell-note {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-top: var(--space-1);
}

/* Features */
.features-section {
  background-color: var(--surface);
}

.features-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}

.feature-card {
  text-align: center;
  padding: var(--space-6);
}

.feature-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 64px;
  margin-bottom: var(--space-4);
  border-radius: var(--radius-full);
  background-color: rgba(37, 99, 235, 0.1);
  color: var(--primary);
  font-size: 1.5rem;
}

.feature-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.feature-desc {
  color: var(--text-secondary);
}

/* Feedback */
.testimonial-card {
  padding: var(--space-8);
}

.testimonial-stars {
  color: var(--star);
  margin-bottom: var(--space-4);
}

.testimonial-quote {
  color: var(--text-secondary);
  font-style: italic;
  margin-bottom: var(--space-6);
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  color: var(--neutral-500);
}

.author-name {
  font-weight: 600;
}

.author-role {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* Login */
.login-section {
  background-color: var(--surface);
}

.login-card {
  padding: var(--space-8);
}

.login-card .section-heading {
  margin-bottom: var(--space-8);
}

.login-card .section-title {
  font-size: 1.875rem;
}

.login-card .section-subtitle {
  font-size: 1rem;
}

.login-signup {
  margin-top: var(--space-6);
  text-align: center;
  color: var(--text-secondary);
}

/* Footer */
.site-footer {
  background-color: var(--neutral-800);
  color: var(--neutral-300);
  padding: var(--space-12) 0 var(--space-6);
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 2fr 1fr 1fr;
}

@media (max-width: 767px) {
  .footer-grid {
    grid-template-columns: 1fr;
  }
}

.footer-brand {
  color: white;
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.social-links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.social-link {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-700);
  color: white;
}

.social-link:hover {
  background-color: var(--neutral-600);
  text-decoration: none;
}

.footer-heading {
  color: white;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
}

.footer-links li {
  margin-bottom: var(--space-2);
}

.footer-links a,
.footer-links .link-button {
  color: var(--neutral-300);
}

.footer-links a:hover,
.footer-links .link-button:hover {
  color: white;
  text-decoration: none;
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-4);
  margin-top: var(--space-8);
  padding-top: var(--space-8);
  border-top: 1px solid var(--neutral-700);
  font-size: 0.875rem;
  color: var(--neutral-400);
}

.footer-legal {
  display: flex;
  gap: var(--space-6);
}

.footer-legal a {
  color: var(--neutral-400);
}

.footer-legal a:hover {
  color: white;
}
"#;
