pub const NAV_STYLES: &str = r#"
.nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background-color: var(--surface);
  z-index: 100;
  transition: box-shadow var(--transition);
}

.nav.scrolled {
  box-shadow: var(--shadow);
}

.nav-container {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 var(--space-4);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav-menu {
  display: flex;
  gap: var(--space-8);
  list-style: none;
}

.nav-link {
  position: relative;
  color: var(--text-secondary);
}

.nav-link::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background-color: var(--primary);
  transition: width var(--transition);
}

.nav-link.active {
  color: var(--primary);
}

.nav-link.active::after {
  width: 100%;
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle span {
  display: block;
  width: 24px;
  height: 2px;
  margin: 5px 0;
  background-color: var(--text-primary);
  transition: transform var(--transition), opacity var(--transition);
}

.nav-toggle.active span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.nav-toggle.active span:nth-child(2) {
  opacity: 0;
}

.nav-toggle.active span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: var(--space-2);
  cursor: pointer;
  color: var(--text-primary);
}

@media (max-width: 768px) {
  .nav-toggle {
    display: block;
  }

  .nav-menu {
    position: fixed;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: var(--space-8);
    background-color: var(--surface);
    transform: translateY(-150%);
    transition: transform var(--transition);
  }

  .nav-menu.active {
    transform: translateY(0);
  }
}
"#;

pub const SECTION_STYLES: &str = r#"
section {
  padding: calc(var(--header-height) + var(--space-8)) var(--space-4) var(--space-16);
  max-width: 1100px;
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  margin-bottom: var(--space-8);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-4);
}

.project-card,
.contact-card,
.skill-item,
.timeline-item {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-4);
}

/* reveal-on-scroll: only items the ui context marked pending start hidden */
.reveal-pending {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal-pending.revealed {
  opacity: 1;
  transform: translateY(0);
}

@media (prefers-reduced-motion: reduce) {
  .reveal-pending {
    opacity: 1;
    transform: none;
    transition: none;
  }
}
"#;

pub const CONTACT_STYLES: &str = r#"
.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  max-width: 560px;
}

.contact-form input,
.contact-form textarea {
  padding: var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-status {
  min-height: 1.5rem;
  color: var(--primary);
}

.back-to-top {
  position: fixed;
  right: var(--space-8);
  bottom: var(--space-8);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition);
}

.back-to-top.visible {
  opacity: 1;
  pointer-events: auto;
}
"#;
