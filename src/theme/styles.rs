//! Global CSS styles for the hero section.
//!
//! Mobile-first; the `md` breakpoint (768px) switches the navbar to the
//! desktop layout, `sm` (640px) widens spacing and puts the form on one row.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --night: #030712;
  --surface: rgba(17, 24, 39, 0.6);
  --surface-solid: rgba(17, 24, 39, 0.95);
  --border: #374151;

  /* BARS */
  --ember: rgb(255, 60, 0);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --text-faint: #6b7280;

  /* SEMANTIC */
  --success-text: #86efac;
  --success-bg: rgba(34, 197, 94, 0.2);
  --success-border: rgba(34, 197, 94, 0.3);
  --danger: #fca5a5;

  /* Typography */
  --font-space: 'Space Grotesk', system-ui, sans-serif;
  --font-inter: 'Inter', system-ui, sans-serif;
  --font-instrument: 'Instrument Serif', Georgia, serif;
  --headline-size: clamp(1.5rem, 6vw, 3.75rem);
  --subtitle-size: clamp(1rem, 3vw, 1.5rem);

  /* Transitions */
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-space);
  background: var(--night);
  color: var(--text-primary);
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Animations === */
@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.fade-in {
  opacity: 0;
  animation: fadeIn 0.8s ease-out forwards;
}

/* === Hero Layout === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0 1.5rem;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  background: var(--night);
}

.hero-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 56rem;
  margin: 0 auto;
  min-height: 100vh;
  padding: 2rem 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.hero-trust { margin-bottom: 1.5rem; }

.hero-headline {
  width: 100%;
  padding: 0 1rem;
  margin-bottom: 1.5rem;
  line-height: 1.25;
  letter-spacing: -0.025em;
}

.headline-lead,
.headline-accent {
  display: block;
  font-size: var(--headline-size);
  white-space: nowrap;
}

.headline-lead {
  font-family: var(--font-inter);
  font-weight: 500;
}

.headline-accent {
  font-family: var(--font-instrument);
  font-style: italic;
}

.hero-subtitle {
  margin-bottom: 1.5rem;
  padding: 0 1rem;
}

.subtitle-line {
  font-size: var(--subtitle-size);
  color: var(--text-muted);
  line-height: 1.6;
}

.hero-form {
  width: 100%;
  max-width: 42rem;
  margin-bottom: 1.5rem;
  padding: 0 1rem;
}

/* === Gradient Bars === */
.gradient-bars {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
}

.gradient-bars-row {
  display: flex;
  width: 100%;
  height: 100%;
  transform: translateZ(0);
  backface-visibility: hidden;
}

.gradient-bar {
  height: 100%;
  background: linear-gradient(to top, var(--ember), transparent);
  transform-origin: bottom;
  transition: transform 0.1s ease-out;
  outline: 1px solid rgba(0, 0, 0, 0);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: 1.5rem;
  background: transparent;
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
}

.navbar-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  font-weight: 700;
  font-size: 1.25rem;
  letter-spacing: -0.05em;
}

.nav-desktop {
  display: none;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-normal);
}

.nav-link:hover { color: var(--text-primary); }

.nav-mobile-panel {
  margin-top: 1rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: var(--surface-solid);
  backdrop-filter: blur(4px);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.nav-link-mobile { padding: 0.5rem 0; }

.nav-cta-mobile { width: 100%; }

/* === Buttons === */
.btn-light,
.btn-pending {
  border: none;
  border-radius: 9999px;
  padding: 0.5rem 1.25rem;
  font-family: var(--font-space);
  font-size: 1rem;
  white-space: nowrap;
  transition: all var(--transition-normal);
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.btn-light {
  background: #ffffff;
  color: #000000;
}

.btn-light:hover {
  background: #f3f4f6;
  transform: scale(1.05);
}

.btn-pending {
  background: #4b5563;
  color: var(--text-secondary);
  cursor: not-allowed;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
}

.spinner {
  display: inline-block;
  width: 1rem;
  height: 1rem;
  border: 2px solid var(--text-secondary);
  border-top-color: #000000;
  border-radius: 9999px;
  animation: spin 1s linear infinite;
}

/* === Trust Elements === */
.trust-elements {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 0.75rem;
  border-radius: 9999px;
  background: var(--surface);
  backdrop-filter: blur(4px);
  font-size: 0.75rem;
}

.avatar-stack { display: flex; }

.avatar-stack .avatar + .avatar { margin-left: -0.5rem; }

.avatar {
  position: relative;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  overflow: hidden;
  border: 2px solid var(--border);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}

.avatar-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.4), transparent);
}

.trust-caption { white-space: nowrap; }

.trust-count { font-weight: 600; }

/* === Waitlist Form === */
.waitlist {
  position: relative;
  z-index: 10;
  width: 100%;
}

.waitlist-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.input-field {
  flex: 1;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  background: var(--surface);
  border: 1px solid var(--border);
  outline: none;
  color: var(--text-primary);
  font-family: var(--font-space);
  font-size: 0.875rem;
  box-shadow: 0 0 15px rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(4px);
  transition: all var(--transition-normal);
}

.input-field:focus { border-color: #ffffff; }

.waitlist-submit { padding: 0.75rem 1.5rem; font-size: 0.875rem; }

.waitlist-error {
  margin-top: 0.75rem;
  color: var(--danger);
  font-size: 0.875rem;
}

.waitlist-success {
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  background: var(--success-bg);
  border: 1px solid var(--success-border);
  color: var(--success-text);
  text-align: center;
  font-size: 0.875rem;
}

/* === Social Links === */
.social-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.social-link {
  color: var(--text-faint);
  transition: color var(--transition-normal);
}

.social-link:hover { color: var(--text-secondary); }

/* === Breakpoints === */
@media (min-width: 640px) {
  .hero { padding: 0 2rem; }
  .hero-content { padding: 4rem 0; }
  .hero-trust, .hero-headline, .hero-form { margin-bottom: 2rem; }
  .hero-subtitle { margin-bottom: 2.5rem; }
  .trust-elements { padding: 0.5rem 1rem; font-size: 0.875rem; }
  .avatar { width: 2rem; height: 2rem; }
  .avatar-stack .avatar + .avatar { margin-left: -0.75rem; }
  .waitlist-form { flex-direction: row; }
  .input-field, .waitlist-submit, .waitlist-success { padding: 1rem 2rem; font-size: 1rem; }
  .spinner { width: 1.25rem; height: 1.25rem; }
  .social-link .icon { width: 22px; height: 22px; }
}

@media (min-width: 768px) {
  .hero { padding: 0 3rem; }
  .navbar { padding: 1.5rem 3rem; }
  .nav-desktop { display: flex; }
  .nav-mobile-toggle, .nav-mobile-panel { display: none; }
  .avatar { width: 2.5rem; height: 2.5rem; }
}
"#;
