pub const STYLESHEET: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Poppins:wght@400;600&display=swap');
body { font-family: 'Poppins', sans-serif; background-color: #F5F7FA; color: #2D3748; margin: 0; }
main { margin-left: 280px; padding: 0 40px 40px; max-width: 960px; }
.sidebar { position: fixed; top: 0; left: 0; bottom: 0; width: 250px; overflow-y: auto; padding: 20px; background: #EDF2F7; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar a { color: #2B6CB0; text-decoration: none; }
.nav-level-2 { padding-left: 1em; }
.nav-level-3 { padding-left: 2em; }
.page-title { font-size: 48px; text-align: center; margin-bottom: 10px; font-weight: 600; }
.names-list { font-size: 20px; text-align: center; margin-bottom: 40px; }
.names-list span { padding: 5px 15px; font-weight: 500; }
.title { font-size: 40px; text-align: center; margin-top: 40px; margin-bottom: 20px; border-bottom: 3px solid #2B6CB0; padding-bottom: 10px; font-weight: 600; color: #2B6CB0; }
.section-header { font-size: 28px; font-weight: 500; color: #2B6CB0; }
.subsection-header { font-size: 20px; font-weight: 400; color: #2B6CB0; }
.contribution-table { width: 100%; border-collapse: collapse; margin-top: 20px; }
.contribution-table th, .contribution-table td { border: 1px solid #CBD5E0; text-align: left; padding: 12px; }
.contribution-table th { background-color: #2B6CB0; color: white; font-weight: 600; }
.contribution-table tr:nth-child(even) { background-color: #EDF2F7; }
figure { margin: 20px 0; text-align: center; }
figure img { max-width: 100%; }
.image-error { color: #9B2C2C; background: #FED7D7; border-radius: 5px; padding: 12px; margin: 20px 0; }
.carousel-controls { display: flex; justify-content: space-between; align-items: center; }
.carousel-button { background-color: #2B6CB0; color: white; border: none; border-radius: 50px; padding: 10px 20px; font-size: 16px; cursor: pointer; margin: 10px; transition: background-color 0.3s ease; }
.carousel-button:hover { background-color: #2C5282; }
.footer { text-align: center; margin-top: 50px; font-size: 14px; color: #A0AEC0; }
"#;

/// Client-side Previous / Next. Each carousel keeps its own `data-index`.
pub const CAROUSEL_SCRIPT: &str = r#"
document.querySelectorAll('.carousel').forEach(function (el) {
  var len = parseInt(el.dataset.len, 10);
  el.querySelectorAll('.carousel-button').forEach(function (button) {
    button.addEventListener('click', function () {
      var step = parseInt(button.dataset.step, 10);
      var index = (parseInt(el.dataset.index, 10) + step + len) % len;
      el.dataset.index = index;
      el.querySelectorAll('.slide').forEach(function (slide) {
        slide.hidden = parseInt(slide.dataset.slide, 10) !== index;
      });
      el.querySelector('.carousel-position').textContent = (index + 1) + ' / ' + len;
    });
  });
});
"#;
