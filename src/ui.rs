use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Today's date line in the page's fixed es-ES long format.
pub fn today_label() -> String {
    format_date_es(Local::now().date_naive())
}

pub fn format_date_es(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    let weekday = match date.weekday() {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    };
    format!(
        "{weekday}, {} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

pub fn render_index(date: &str, tally: u32) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TALLY}}", &tally.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Al-Misbah</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Amiri:wght@400;700&display=swap');

    :root {
      --bg-1: #f4f1e8;
      --bg-2: #cde3d2;
      --ink: #22312a;
      --accent: #1d7a52;
      --accent-2: #3b4a40;
      --gold: #c9a227;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(29, 122, 82, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f2e9 60%, #f6f2e6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 32px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Amiri", "Georgia", serif;
      font-weight: 700;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: #5c6b60;
      font-size: 1rem;
    }

    .fecha {
      margin: 0;
      color: var(--gold);
      font-size: 0.95rem;
      text-transform: capitalize;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    section {
      display: grid;
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(29, 122, 82, 0.1);
    }

    .counter-row {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 12px;
    }

    .counter-value {
      font-size: 3rem;
      font-weight: 600;
      color: var(--accent);
    }

    .formula-arabic {
      font-family: "Amiri", serif;
      font-size: 2rem;
      direction: rtl;
      text-align: center;
      margin: 0;
    }

    .formula-latin {
      text-align: center;
      font-weight: 600;
      margin: 4px 0 0;
    }

    .formula-meaning {
      text-align: center;
      color: #5c6b60;
      margin: 2px 0 0;
      font-size: 0.95rem;
    }

    .formula-list {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 8px;
    }

    .formula-item {
      border: 1px solid rgba(29, 122, 82, 0.25);
      background: transparent;
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      color: var(--ink);
      cursor: pointer;
    }

    .formula-item.active {
      background: var(--accent);
      color: white;
      border-color: var(--accent);
    }

    .beads {
      display: grid;
      grid-template-columns: repeat(11, 1fr);
      gap: 8px;
    }

    .bead {
      appearance: none;
      border: 1px solid rgba(29, 122, 82, 0.25);
      background: white;
      border-radius: 50%;
      aspect-ratio: 1;
      font-size: 0.75rem;
      color: #7a857d;
      cursor: pointer;
      transition: transform 150ms ease, background 150ms ease;
    }

    .bead.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .bead.final {
      border-width: 2px;
      border-color: var(--gold);
    }

    .bead.pulse {
      animation: pulse 300ms ease;
      transform: scale(1.15);
    }

    @keyframes pulse {
      0% { transform: scale(1); }
      50% { transform: scale(1.3); }
      100% { transform: scale(1.15); }
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    button.primary,
    button.secondary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button.primary:active,
    button.secondary:active {
      transform: scale(0.98);
    }

    .primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(29, 122, 82, 0.3);
    }

    .secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(59, 74, 64, 0.3);
    }

    .verse-arabic {
      font-family: "Amiri", serif;
      font-size: 1.6rem;
      direction: rtl;
      text-align: center;
      line-height: 2.2;
      margin: 0;
    }

    .verse-translation {
      text-align: center;
      font-style: italic;
      margin: 10px 0 0;
    }

    .verse-meta {
      display: flex;
      justify-content: center;
      gap: 10px;
      flex-wrap: wrap;
      margin-top: 10px;
    }

    .verse-reference {
      font-weight: 600;
      color: var(--accent);
    }

    .verse-topic {
      background: rgba(201, 162, 39, 0.18);
      color: #8a6d12;
      border-radius: 999px;
      padding: 2px 12px;
      font-size: 0.85rem;
    }

    .verse-reflection {
      color: #5c6b60;
      font-size: 0.95rem;
      text-align: center;
      margin: 10px 0 0;
    }

    .filter-bar {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .filter-btn {
      border: 1px solid rgba(29, 122, 82, 0.25);
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      color: var(--ink);
      cursor: pointer;
    }

    .filter-btn.active {
      background: var(--accent);
      color: white;
      border-color: var(--accent);
    }

    .names-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
      gap: 12px;
    }

    .name-card {
      background: white;
      border: 1px solid rgba(29, 122, 82, 0.1);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 4px;
      text-align: center;
    }

    .name-arabic {
      font-family: "Amiri", serif;
      font-size: 1.4rem;
      color: var(--accent);
    }

    .name-latin {
      font-weight: 600;
    }

    .name-meaning {
      color: #5c6b60;
      font-size: 0.85rem;
    }

    .hint {
      margin: 0;
      color: #6f7a70;
      font-size: 0.9rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .beads {
        grid-template-columns: repeat(7, 1fr);
      }
      button.primary,
      button.secondary {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Al-Misbah</h1>
      <p class="subtitle">Tasbih, verso del día y los Nombres de Alá.</p>
      <p class="fecha" id="fecha">{{DATE}}</p>
    </header>

    <section>
      <div class="counter-row">
        <h2>Contador de Tasbih</h2>
        <span class="counter-value" id="counter">{{TALLY}}</span>
      </div>
      <div class="card">
        <p class="formula-arabic" id="formulaArabic"></p>
        <p class="formula-latin" id="formulaLatin"></p>
        <p class="formula-meaning" id="formulaMeaning"></p>
      </div>
      <div class="formula-list" id="formulaList"></div>
      <div class="beads" id="beads"></div>
      <div class="actions">
        <button class="primary" id="addOne" type="button">+1</button>
        <button class="secondary" id="resetCounter" type="button">Reiniciar</button>
      </div>
      <p class="hint">También puedes contar con la barra espaciadora o pulsar una perla para saltar a ella.</p>
    </section>

    <section>
      <h2>Verso del día</h2>
      <div class="card">
        <p class="verse-arabic" id="verseArabic"></p>
        <p class="verse-translation" id="verseTranslation"></p>
        <div class="verse-meta">
          <span class="verse-reference" id="verseReference"></span>
          <span class="verse-topic" id="verseTopic"></span>
        </div>
        <p class="verse-reflection" id="verseReflection"></p>
      </div>
      <div class="actions">
        <button class="primary" id="newVerse" type="button">Nuevo verso</button>
        <button class="secondary" id="shareVerse" type="button">Compartir</button>
      </div>
    </section>

    <section>
      <h2>Los Nombres de Alá</h2>
      <div class="filter-bar" id="filterBar"></div>
      <div class="names-grid" id="namesGrid"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const counterEl = document.getElementById('counter');
    const beadsEl = document.getElementById('beads');
    const formulaArabicEl = document.getElementById('formulaArabic');
    const formulaLatinEl = document.getElementById('formulaLatin');
    const formulaMeaningEl = document.getElementById('formulaMeaning');
    const formulaListEl = document.getElementById('formulaList');
    const verseArabicEl = document.getElementById('verseArabic');
    const verseTranslationEl = document.getElementById('verseTranslation');
    const verseReferenceEl = document.getElementById('verseReference');
    const verseTopicEl = document.getElementById('verseTopic');
    const verseReflectionEl = document.getElementById('verseReflection');
    const filterBarEl = document.getElementById('filterBar');
    const namesGridEl = document.getElementById('namesGrid');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, body) => {
      const options = body === undefined ? undefined : {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      };
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const playTone = (tone) => {
      if (!tone) {
        return;
      }
      try {
        const ctx = new (window.AudioContext || window.webkitAudioContext)();
        const oscillator = ctx.createOscillator();
        const gain = ctx.createGain();
        oscillator.connect(gain);
        gain.connect(ctx.destination);
        oscillator.frequency.value = tone.frequency_hz;
        oscillator.type = 'sine';
        gain.gain.setValueAtTime(tone.gain, ctx.currentTime);
        gain.gain.exponentialRampToValueAtTime(0.01, ctx.currentTime + tone.duration_ms / 1000);
        oscillator.start(ctx.currentTime);
        oscillator.stop(ctx.currentTime + tone.duration_ms / 1000);
      } catch (e) {
        // sin AudioContext el tono simplemente no suena
      }
    };

    const renderTasbih = (data) => {
      counterEl.textContent = data.tally;

      beadsEl.innerHTML = '';
      data.markers.forEach((marker) => {
        const bead = document.createElement('button');
        bead.type = 'button';
        bead.className = 'bead';
        if (marker.position === data.cycle_len) {
          bead.classList.add('final');
        }
        if (marker.active) {
          bead.classList.add('active');
        }
        if (marker.emphasized) {
          bead.classList.add('pulse');
        }
        bead.textContent = marker.position;
        bead.addEventListener('click', () => {
          jumpTo(marker.position).catch((err) => setStatus(err.message, 'error'));
        });
        beadsEl.appendChild(bead);
      });

      const formula = data.formulas[data.formula_index];
      formulaArabicEl.textContent = formula.arabic;
      formulaLatinEl.textContent = formula.latin;
      formulaMeaningEl.textContent = `${formula.meaning} (${formula.recommendation})`;

      formulaListEl.innerHTML = '';
      data.formulas.forEach((item, index) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'formula-item';
        btn.classList.toggle('active', index === data.formula_index);
        btn.textContent = item.latin;
        btn.addEventListener('click', () => {
          pickFormula(index).catch((err) => setStatus(err.message, 'error'));
        });
        formulaListEl.appendChild(btn);
      });
    };

    const setText = (el, value) => {
      if (el) {
        el.textContent = value;
      }
    };

    const renderVerse = (verse) => {
      setText(verseArabicEl, verse.arabic);
      setText(verseTranslationEl, `"${verse.translation}"`);
      setText(verseReferenceEl, verse.reference);
      setText(verseTopicEl, verse.topic);
      setText(verseReflectionEl, verse.reflection);
    };

    const renderNames = (data) => {
      filterBarEl.innerHTML = '';
      ['all', ...data.categories].forEach((tag) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'filter-btn';
        btn.classList.toggle('active', tag === data.selected);
        btn.textContent = tag === 'all' ? 'Todos' : tag.charAt(0).toUpperCase() + tag.slice(1);
        btn.addEventListener('click', () => {
          selectCategory(tag).catch((err) => setStatus(err.message, 'error'));
        });
        filterBarEl.appendChild(btn);
      });

      namesGridEl.innerHTML = '';
      data.entries.forEach((entry) => {
        const card = document.createElement('div');
        card.className = 'name-card';
        card.style.display = entry.visible ? '' : 'none';

        const arabic = document.createElement('span');
        arabic.className = 'name-arabic';
        arabic.textContent = entry.arabic;
        const latin = document.createElement('span');
        latin.className = 'name-latin';
        latin.textContent = entry.latin;
        const meaning = document.createElement('span');
        meaning.className = 'name-meaning';
        meaning.textContent = entry.meaning;

        card.append(arabic, latin, meaning);
        namesGridEl.appendChild(card);
      });
    };

    const addOne = async () => {
      const data = await api('/api/tasbih/increment', {});
      renderTasbih(data);
      playTone(data.tone);
    };

    const resetCounter = async () => {
      const data = await api('/api/tasbih/reset', {});
      renderTasbih(data);
      playTone(data.tone);
    };

    const jumpTo = async (position) => {
      renderTasbih(await api('/api/tasbih/set', { position }));
    };

    const pickFormula = async (index) => {
      renderTasbih(await api('/api/tasbih/formula', { index }));
    };

    const newVerse = async () => {
      renderVerse(await api('/api/verse/random', {}));
    };

    const shareVerse = async () => {
      const probe = {
        native_share: typeof navigator.share === 'function',
        clipboard: !!(navigator.clipboard && navigator.clipboard.writeText)
      };
      const data = await api('/api/verse/share', probe);
      if (data.outcome.kind === 'shared') {
        navigator.share({
          title: 'Verso del Corán',
          text: data.text,
          url: window.location.href
        }).catch(() => {});
      } else if (data.outcome.kind === 'copied') {
        await navigator.clipboard.writeText(data.text);
        setStatus(data.outcome.confirmation, 'ok');
        setTimeout(() => setStatus('', ''), 2400);
      }
    };

    const selectCategory = async (tag) => {
      renderNames(await api('/api/names/select', { category: tag }));
    };

    const refresh = async () => {
      const [tasbih, verse, names] = await Promise.all([
        api('/api/tasbih'),
        api('/api/verse'),
        api('/api/names')
      ]);
      renderTasbih(tasbih);
      renderVerse(verse);
      renderNames(names);
    };

    document.getElementById('addOne').addEventListener('click', () => {
      addOne().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('resetCounter').addEventListener('click', () => {
      resetCounter().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('newVerse').addEventListener('click', () => {
      newVerse().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('shareVerse').addEventListener('click', () => {
      shareVerse().catch((err) => setStatus(err.message, 'error'));
    });

    document.addEventListener('keydown', (event) => {
      if (event.code === 'Space' && !event.target.matches('input, textarea')) {
        event.preventDefault();
        addOne().catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_uses_spanish_long_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_date_es(date), "jueves, 6 de agosto de 2026");
    }

    #[test]
    fn date_label_in_january() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_date_es(date), "lunes, 5 de enero de 2026");
    }

    #[test]
    fn render_index_fills_every_placeholder() {
        let page = render_index("jueves, 6 de agosto de 2026", 12);
        assert!(page.contains("jueves, 6 de agosto de 2026"));
        assert!(page.contains(">12<"));
        assert!(!page.contains("{{"));
    }
}
