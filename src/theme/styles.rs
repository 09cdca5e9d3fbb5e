//! Global CSS styles for The Digibazzar.
//!
//! Brand variables (`--brand-*`, `--text-*`, `--surface*`) are declared by
//! [`super::brand_palette_css`].

pub const GLOBAL_STYLES: &str = r#"
/* === Design Tokens === */
:root {
  --font-sans: 'Poppins', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --radius: 12px;
  --shadow-card: 0 10px 30px rgba(31, 26, 36, 0.08);
  --shadow-hover: 0 18px 40px rgba(93, 46, 142, 0.18);

  --transition-fast: 150ms ease;
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
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-dark);
  line-height: 1.7;
  min-height: 100vh;
}

img {
  max-width: 100%;
  display: block;
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: var(--surface);
  box-shadow: 0 2px 12px rgba(31, 26, 36, 0.06);
}

.nav-header-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--brand-primary);
}

.brand-title span {
  color: var(--brand-highlight);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--brand-primary);
}

/* === Buttons === */
.btn-primary {
  padding: 0.85rem 2rem;
  background: var(--brand-primary);
  border: none;
  border-radius: 999px;
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-normal), transform var(--transition-fast);
}

.btn-primary:hover:not(:disabled) {
  background: var(--brand-purple-dark);
  transform: translateY(-2px);
}

.btn-primary:disabled {
  opacity: 0.7;
  cursor: progress;
}

.btn-load-more {
  display: block;
  margin: 3rem auto 0;
  padding: 0.85rem 2.5rem;
  background: transparent;
  border: 2px solid var(--brand-primary);
  border-radius: 999px;
  color: var(--brand-primary);
  font-family: var(--font-sans);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-load-more:hover {
  background: var(--brand-primary);
  color: #fff;
}

.read-more {
  background: none;
  border: none;
  padding: 0;
  color: var(--brand-primary);
  font-family: var(--font-sans);
  font-weight: 600;
  cursor: pointer;
}

.read-more:hover {
  color: var(--brand-highlight);
}

.btn-ghost {
  background: transparent;
  border: 1px solid rgba(107, 100, 117, 0.3);
  border-radius: 999px;
  padding: 0.5rem 1.25rem;
  color: var(--text-muted);
  cursor: pointer;
}

.icon-btn {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: none;
  background: var(--surface-alt);
  color: var(--text-dark);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--brand-primary);
  color: #fff;
}

/* === Home Page === */
.hero {
  background: linear-gradient(135deg, var(--brand-primary), var(--brand-purple-dark));
  color: #fff;
  padding: 6rem 2rem;
  text-align: center;
}

.hero h1 {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  margin-bottom: 1rem;
}

.hero p {
  max-width: 640px;
  margin: 0 auto 2rem;
  font-size: var(--text-lg);
  opacity: 0.9;
}

.hero .btn-primary {
  background: var(--brand-highlight);
}

.services {
  max-width: 1200px;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  text-align: center;
  margin-bottom: 2.5rem;
}

.service-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.service-card {
  padding: 1.75rem;
  border-radius: var(--radius);
  background: var(--surface-alt);
  border-top: 4px solid var(--brand-primary);
}

.service-card h3 {
  margin: 0.75rem 0 0.5rem;
}

.service-card p {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Blog Listing === */
.blog-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 2rem 5rem;
}

.blog-intro {
  text-align: center;
  margin-bottom: 3rem;
}

.blog-intro h1 {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
}

.blog-intro p {
  color: var(--text-muted);
}

.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.blog-card {
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow-card);
  display: flex;
  flex-direction: column;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.blog-card:hover {
  transform: translateY(-6px);
  box-shadow: var(--shadow-hover);
}

.blog-image {
  position: relative;
  aspect-ratio: 3 / 2;
  background: var(--surface-alt);
  overflow: hidden;
}

.blog-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.blog-image .blog-category {
  position: absolute;
  top: 1rem;
  left: 1rem;
}

.blog-category {
  display: inline-block;
  padding: 0.25rem 0.85rem;
  border-radius: 999px;
  color: #fff;
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.04em;
  text-transform: uppercase;
}

.blog-content {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  flex: 1;
}

.blog-date {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.blog-content h3 {
  font-size: var(--text-lg);
  line-height: 1.4;
}

.blog-content p {
  color: var(--text-muted);
  font-size: var(--text-sm);
  flex: 1;
}

.blog-footer {
  text-align: center;
  margin-top: 2rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Single Article === */
.single-post {
  max-width: 860px;
  margin: 0 auto;
  position: relative;
  animation: fade-in var(--transition-normal);
}

.single-post .close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 2;
}

.post-hero {
  border-radius: var(--radius);
  overflow: hidden;
  aspect-ratio: 2 / 1;
  background: var(--surface-alt);
}

.post-hero img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.post-header {
  margin: 2rem 0;
}

.post-header h1 {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  line-height: 1.3;
  margin: 0.75rem 0;
}

.post-meta {
  display: flex;
  gap: 1rem;
  align-items: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.article-body h2,
.article-body h3 {
  font-family: var(--font-serif);
  margin: 2rem 0 0.75rem;
}

.article-body p {
  margin-bottom: 1.25rem;
}

.article-body p:first-child {
  font-size: var(--text-lg);
}

.article-body blockquote {
  margin: 2rem 0;
  padding: 1.25rem 1.75rem;
  border-left: 4px solid var(--brand-highlight);
  background: var(--surface-alt);
  font-style: italic;
}

.article-body ul {
  margin: 0 0 1.25rem 1.5rem;
}

.article-body li {
  margin-bottom: 0.5rem;
}

.back-link {
  margin-top: 2rem;
}

/* === Comments === */
.comments-section {
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid rgba(107, 100, 117, 0.2);
}

.comments-section h3 {
  margin-bottom: 1.25rem;
}

.comment-form {
  display: grid;
  gap: 1rem;
}

.comment-form .form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid rgba(107, 100, 117, 0.3);
  border-radius: 8px;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--text-dark);
  background: var(--surface);
}

.input-field:focus {
  outline: none;
  border-color: var(--brand-primary);
  box-shadow: 0 0 0 3px rgba(93, 46, 142, 0.15);
}

textarea.input-field {
  min-height: 140px;
  resize: vertical;
}

.comment-notice {
  padding: 0.85rem 1rem;
  border-radius: 8px;
  background: rgba(46, 158, 91, 0.12);
  color: var(--brand-green);
  font-weight: 500;
}

.comment-error {
  color: var(--brand-red);
  font-size: var(--text-sm);
}

/* === Footer === */
.site-footer {
  padding: 2rem;
  text-align: center;
  background: var(--brand-purple-dark);
  color: rgba(255, 255, 255, 0.8);
  font-size: var(--text-sm);
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 720px) {
  .comment-form .form-row {
    grid-template-columns: 1fr;
  }

  .hero h1 {
    font-size: var(--text-2xl);
  }
}
"#;
