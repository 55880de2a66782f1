pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1fb;
      --bg-2: #d9ccf5;
      --ink: #2b2a33;
      --accent: #7c5cff;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(67, 56, 120, 0.16);
      --terrible: #ef4444;
      --bad: #f97316;
      --okay: #f59e0b;
      --good: #10b981;
      --amazing: #ec4899;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece4fb 60%, #f6f2fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
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
      gap: 26px;
    }

    header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 12px; }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle { margin: 0; color: #5f5c6b; font-size: 0.95rem; }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b6478;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .date-nav { display: flex; align-items: center; gap: 8px; }

    .date-nav button {
      border: none;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 10px;
      width: 34px;
      height: 34px;
      font-size: 1rem;
      cursor: pointer;
    }

    .date-nav button:disabled { opacity: 0.35; cursor: default; }

    .date-nav .current { font-weight: 600; min-width: 120px; text-align: center; }

    .moods { display: flex; flex-wrap: wrap; gap: 10px; }

    .mood-btn {
      flex: 1;
      min-width: 110px;
      border: 2px solid transparent;
      border-radius: 16px;
      padding: 14px 10px;
      font-size: 0.95rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    .mood-btn:active { transform: scale(0.97); }
    .mood-btn.selected { border-color: var(--ink); transform: translateY(-2px); }
    .mood-terrible { background: var(--terrible); }
    .mood-bad { background: var(--bad); }
    .mood-okay { background: var(--okay); }
    .mood-good { background: var(--good); }
    .mood-amazing { background: var(--amazing); }

    textarea {
      width: 100%;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.16);
      padding: 12px;
      min-height: 70px;
      font-family: inherit;
      font-size: 0.95rem;
      resize: vertical;
    }

    .chips { display: flex; flex-wrap: wrap; gap: 8px; }

    .chip {
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: transparent;
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.85rem;
      cursor: pointer;
    }

    .chip.on { background: var(--accent); border-color: var(--accent); color: white; }

    .save-row { display: flex; align-items: center; gap: 14px; }

    .save-btn {
      border: none;
      border-radius: 999px;
      padding: 14px 26px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
      box-shadow: 0 10px 24px rgba(124, 92, 255, 0.3);
    }

    .status { font-size: 0.9rem; color: #6b6478; min-height: 1.2em; }
    .status[data-type="error"] { color: #c63b2b; }
    .status[data-type="ok"] { color: #2d7a4b; }

    .week-strip { display: grid; grid-template-columns: repeat(7, 1fr); gap: 10px; }

    .week-day { display: grid; justify-items: center; gap: 6px; font-size: 0.8rem; }

    .week-dot {
      width: 40px;
      height: 40px;
      border-radius: 50%;
      background: rgba(47, 72, 88, 0.1);
      display: grid;
      place-items: center;
      color: white;
      font-weight: 600;
    }

    .month-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 6px; }

    .month-cell {
      aspect-ratio: 1;
      border-radius: 10px;
      border: 1px dashed rgba(47, 72, 88, 0.15);
      padding: 4px 6px;
      font-size: 0.8rem;
      position: relative;
    }

    .month-cell.filled { border-style: solid; background: #fff; }
    .month-cell.empty { border: none; }
    .month-cell .dot { position: absolute; right: 6px; top: 6px; width: 12px; height: 12px; border-radius: 50%; }

    .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 14px; }

    .metric .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b85a0;
    }

    .metric .value { font-size: 1.6rem; font-weight: 600; color: var(--accent-2); }

    .buckets { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; }

    .bucket { border: 1px solid rgba(47, 72, 88, 0.1); border-radius: 14px; padding: 12px; }

    .breathing-circle {
      width: 140px;
      height: 140px;
      border-radius: 50%;
      margin: 0 auto;
      background: radial-gradient(circle, rgba(124, 92, 255, 0.35), rgba(124, 92, 255, 0.08));
      display: grid;
      place-items: center;
      font-size: 2rem;
      font-weight: 600;
      transition: transform 1s ease-in-out;
    }

    .breathing-circle.inhale { transform: scale(1.25); }
    .breathing-circle.exhale { transform: scale(0.85); }

    .hidden { display: none; }

    .demo-badge {
      font-size: 0.75rem;
      background: rgba(245, 158, 11, 0.15);
      color: #92600a;
      border-radius: 999px;
      padding: 3px 10px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Mood Journal</h1>
        <p class="subtitle">One mood a day, and what the numbers say about it.</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" data-tab="journal" type="button">Journal</button>
        <button class="tab" data-tab="month" type="button">Calendar</button>
        <button class="tab" data-tab="analytics" type="button">Analytics</button>
        <button class="tab" data-tab="breathing" type="button">Breathe</button>
      </div>
    </header>

    <section id="panel-journal">
      <div class="card">
        <div class="save-row" style="justify-content: space-between;">
          <div class="date-nav">
            <button id="prev-day" type="button">&#8249;</button>
            <span class="current" id="current-date">{{TODAY}}</span>
            <button id="next-day" type="button">&#8250;</button>
          </div>
          <span id="weather-line" class="subtitle"></span>
        </div>

        <div class="moods" id="moods">
          <button class="mood-btn mood-terrible" data-mood="terrible" type="button">Terrible</button>
          <button class="mood-btn mood-bad" data-mood="bad" type="button">Bad</button>
          <button class="mood-btn mood-okay" data-mood="okay" type="button">Okay</button>
          <button class="mood-btn mood-good" data-mood="good" type="button">Good</button>
          <button class="mood-btn mood-amazing" data-mood="amazing" type="button">Amazing</button>
        </div>

        <textarea id="note" placeholder="Anything worth remembering about this day?"></textarea>
        <div class="chips" id="tags"></div>

        <div class="save-row">
          <button class="save-btn" id="save" type="button">Save this day</button>
          <span class="status" id="status"></span>
        </div>
      </div>

      <div class="card" style="margin-top: 18px;">
        <strong>Your week</strong>
        <div class="week-strip" id="week-strip"></div>
      </div>
    </section>

    <section id="panel-month" class="hidden">
      <div class="card">
        <div class="save-row" style="justify-content: space-between;">
          <div class="date-nav">
            <button id="prev-month" type="button">&#8249;</button>
            <span class="current" id="month-label"></span>
            <button id="next-month" type="button">&#8250;</button>
          </div>
        </div>
        <div class="month-grid" id="month-grid"></div>
      </div>
    </section>

    <section id="panel-analytics" class="hidden">
      <div class="card">
        <div class="metrics">
          <div class="metric"><span class="label">Entries</span><span class="value" id="m-entries">0</span></div>
          <div class="metric"><span class="label">Weekly average</span><span class="value" id="m-weekly">0.0</span></div>
          <div class="metric"><span class="label">Trend</span><span class="value" id="m-trend">flat</span></div>
          <div class="metric"><span class="label">Positive days</span><span class="value" id="m-positive">0%</span></div>
          <div class="metric"><span class="label">Streak</span><span class="value" id="m-streak">0</span></div>
        </div>
      </div>
      <div class="card" style="margin-top: 18px;">
        <strong>Weather and mood</strong>
        <div class="buckets" id="buckets"></div>
        <p class="subtitle" id="buckets-empty">Save a few entries with weather attached to see this.</p>
      </div>
    </section>

    <section id="panel-breathing" class="hidden">
      <div class="card" style="justify-items: center; text-align: center;">
        <strong id="breath-phase">Ready?</strong>
        <div class="breathing-circle" id="breath-circle"><span id="breath-count">4</span></div>
        <p class="subtitle">Inhale 4s, hold 7s, exhale 8s.</p>
        <div class="save-row">
          <button class="save-btn" id="breath-toggle" type="button">Start</button>
        </div>
      </div>
    </section>
  </main>

  <script>
    const TAGS = ["work","sport","family","friends","rest","leisure","studies","outing",
                  "nature","reading","music","cooking","meditation","travel","shopping","cinema"];
    const MOOD_COLORS = { terrible: "var(--terrible)", bad: "var(--bad)", okay: "var(--okay)",
                          good: "var(--good)", amazing: "var(--amazing)" };

    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const isoToday = () => new Date().toISOString().split('T')[0];
    let currentDate = '{{TODAY}}';
    let selectedMood = null;
    let selectedTags = [];
    let weatherSnapshot = null;

    const shiftDate = (iso, days) => {
      const d = new Date(iso + 'T00:00:00');
      d.setDate(d.getDate() + days);
      return d.toISOString().split('T')[0];
    };

    // Tabs
    document.querySelectorAll('.tab').forEach((button) => {
      button.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((b) => b.classList.toggle('active', b === button));
        ['journal', 'month', 'analytics', 'breathing'].forEach((name) => {
          document.getElementById('panel-' + name).classList.toggle('hidden', name !== button.dataset.tab);
        });
        if (button.dataset.tab === 'analytics') loadAnalytics();
        if (button.dataset.tab === 'month') loadMonth();
      });
    });

    // Tag chips
    const tagsEl = document.getElementById('tags');
    TAGS.forEach((tag) => {
      const chip = document.createElement('button');
      chip.type = 'button';
      chip.className = 'chip';
      chip.textContent = tag;
      chip.addEventListener('click', () => {
        if (selectedTags.includes(tag)) {
          selectedTags = selectedTags.filter((t) => t !== tag);
        } else {
          selectedTags.push(tag);
        }
        chip.classList.toggle('on', selectedTags.includes(tag));
      });
      tagsEl.appendChild(chip);
    });

    const syncTagChips = () => {
      Array.from(tagsEl.children).forEach((chip) => {
        chip.classList.toggle('on', selectedTags.includes(chip.textContent));
      });
    };

    // Mood buttons
    document.querySelectorAll('.mood-btn').forEach((button) => {
      button.addEventListener('click', () => {
        selectedMood = button.dataset.mood;
        document.querySelectorAll('.mood-btn').forEach((b) =>
          b.classList.toggle('selected', b === button));
      });
    });

    const syncMoodButtons = () => {
      document.querySelectorAll('.mood-btn').forEach((b) =>
        b.classList.toggle('selected', b.dataset.mood === selectedMood));
    };

    const loadDay = async () => {
      document.getElementById('current-date').textContent = currentDate;
      document.getElementById('next-day').disabled = currentDate >= isoToday();
      const res = await fetch('/api/entries/' + currentDate);
      if (!res.ok) return;
      const day = await res.json();
      selectedMood = day.entry ? day.entry.mood : null;
      document.getElementById('note').value = (day.entry && day.entry.note) || '';
      selectedTags = (day.entry && day.entry.tags) ? day.entry.tags.slice() : [];
      syncMoodButtons();
      syncTagChips();
    };

    const loadWeek = async () => {
      const res = await fetch('/api/calendar/week');
      if (!res.ok) return;
      const week = await res.json();
      const strip = document.getElementById('week-strip');
      strip.innerHTML = '';
      const names = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];
      week.cells.forEach((cell, index) => {
        const wrap = document.createElement('div');
        wrap.className = 'week-day';
        const dot = document.createElement('div');
        dot.className = 'week-dot';
        if (cell.entry) {
          dot.style.background = MOOD_COLORS[cell.entry.mood];
          dot.textContent = '';
        } else {
          dot.textContent = '?';
          dot.style.color = '#8b85a0';
        }
        const label = document.createElement('span');
        label.textContent = names[index] + ' ' + cell.date.slice(8);
        wrap.appendChild(dot);
        wrap.appendChild(label);
        strip.appendChild(wrap);
      });
    };

    const loadWeather = async () => {
      try {
        const res = await fetch('/api/weather?city=Paris');
        if (!res.ok) return;
        const report = await res.json();
        weatherSnapshot = { temp: report.temp, condition: report.description, icon: report.icon };
        const line = document.getElementById('weather-line');
        line.textContent = report.name + ' · ' + report.temp + '°C · ' + report.description;
        if (report.demo) {
          const badge = document.createElement('span');
          badge.className = 'demo-badge';
          badge.textContent = 'demo data';
          line.appendChild(document.createTextNode(' '));
          line.appendChild(badge);
        }
      } catch (err) {
        weatherSnapshot = null;
      }
    };

    const save = async () => {
      if (!selectedMood) {
        setStatus('Pick a mood first', 'error');
        return;
      }
      setStatus('Saving...', '');
      const body = {
        mood: selectedMood,
        note: document.getElementById('note').value || null,
        weather: weatherSnapshot,
        tags: selectedTags.length ? selectedTags : null
      };
      const res = await fetch('/api/entries/' + currentDate, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        setStatus(await res.text() || 'Save failed', 'error');
        return;
      }
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
      loadWeek();
    };

    document.getElementById('save').addEventListener('click', () =>
      save().catch((err) => setStatus(err.message, 'error')));
    document.getElementById('prev-day').addEventListener('click', () => {
      currentDate = shiftDate(currentDate, -1);
      loadDay();
    });
    document.getElementById('next-day').addEventListener('click', () => {
      const next = shiftDate(currentDate, 1);
      if (next <= isoToday()) {
        currentDate = next;
        loadDay();
      }
    });

    // Month view
    let monthCursor = { year: Number('{{TODAY}}'.slice(0, 4)), month: Number('{{TODAY}}'.slice(5, 7)) };

    const loadMonth = async () => {
      const { year, month } = monthCursor;
      document.getElementById('month-label').textContent =
        new Date(year, month - 1, 1).toLocaleDateString('en-GB', { month: 'long', year: 'numeric' });
      const res = await fetch('/api/calendar/month?year=' + year + '&month=' + month);
      if (!res.ok) return;
      const data = await res.json();
      const grid = document.getElementById('month-grid');
      grid.innerHTML = '';
      data.cells.forEach((cell) => {
        const div = document.createElement('div');
        if (!cell.date) {
          div.className = 'month-cell empty';
        } else {
          div.className = 'month-cell' + (cell.entry ? ' filled' : '');
          div.textContent = Number(cell.date.slice(8));
          if (cell.entry) {
            const dot = document.createElement('span');
            dot.className = 'dot';
            dot.style.background = MOOD_COLORS[cell.entry.mood];
            div.appendChild(dot);
          }
        }
        grid.appendChild(div);
      });
    };

    document.getElementById('prev-month').addEventListener('click', () => {
      monthCursor.month -= 1;
      if (monthCursor.month === 0) { monthCursor.month = 12; monthCursor.year -= 1; }
      loadMonth();
    });
    document.getElementById('next-month').addEventListener('click', () => {
      monthCursor.month += 1;
      if (monthCursor.month === 13) { monthCursor.month = 1; monthCursor.year += 1; }
      loadMonth();
    });

    // Analytics
    const loadAnalytics = async () => {
      const res = await fetch('/api/analytics');
      if (!res.ok) return;
      const report = await res.json();
      document.getElementById('m-entries').textContent = report.entry_count;
      document.getElementById('m-weekly').textContent = report.weekly_average.toFixed(1);
      document.getElementById('m-trend').textContent = report.trend_label;
      document.getElementById('m-positive').textContent = Math.round(report.positive_ratio * 100) + '%';
      document.getElementById('m-streak').textContent = report.current_streak;

      const buckets = document.getElementById('buckets');
      buckets.innerHTML = '';
      document.getElementById('buckets-empty').classList.toggle('hidden', report.weather_buckets.length > 0);
      const bandLabels = { cold: 'Cold (<15°C)', mild: 'Mild (15-25°C)', warm: 'Warm (≥25°C)' };
      report.weather_buckets.forEach((bucket) => {
        const div = document.createElement('div');
        div.className = 'bucket';
        div.innerHTML = '<strong>' + bandLabels[bucket.band] + '</strong><br>' +
          bucket.average_mood.toFixed(1) + '/5 over ' + bucket.sample_count +
          (bucket.sample_count > 1 ? ' days' : ' day');
        buckets.appendChild(div);
      });
    };

    // 4-7-8 breathing timer
    const PHASES = [
      { name: 'inhale', label: 'Inhale', seconds: 4 },
      { name: 'hold', label: 'Hold', seconds: 7 },
      { name: 'exhale', label: 'Exhale', seconds: 8 }
    ];
    let breathing = null;

    const stepBreath = (phaseIndex, remaining) => {
      const phase = PHASES[phaseIndex];
      const circle = document.getElementById('breath-circle');
      circle.className = 'breathing-circle ' + phase.name;
      document.getElementById('breath-phase').textContent = phase.label;
      document.getElementById('breath-count').textContent = remaining;
      breathing = setTimeout(() => {
        if (remaining > 1) {
          stepBreath(phaseIndex, remaining - 1);
        } else {
          const next = (phaseIndex + 1) % PHASES.length;
          stepBreath(next, PHASES[next].seconds);
        }
      }, 1000);
    };

    document.getElementById('breath-toggle').addEventListener('click', (event) => {
      if (breathing) {
        clearTimeout(breathing);
        breathing = null;
        event.target.textContent = 'Start';
        document.getElementById('breath-phase').textContent = 'Ready?';
        document.getElementById('breath-circle').className = 'breathing-circle';
        document.getElementById('breath-count').textContent = '4';
      } else {
        event.target.textContent = 'Stop';
        stepBreath(0, PHASES[0].seconds);
      }
    });

    loadDay().catch(() => {});
    loadWeek().catch(() => {});
    loadWeather().catch(() => {});
  </script>
</body>
</html>
"#;
