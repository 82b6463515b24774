pub fn render_index(day: u32, date: &str) -> String {
    INDEX_HTML
        .replace("{{DAY}}", &day.to_string())
        .replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="theme-color" content="rgb(108, 99, 255)" />
  <title>StudyFocus</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef1fb;
      --bg-2: #cdd7f7;
      --ink: #27283d;
      --accent: #6c63ff;
      --accent-2: #2f4858;
      --break: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4ecfb 60%, #f2f1fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c5e74;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b8a9d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.highlight {
      color: var(--accent);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
      box-shadow: none;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(108, 99, 255, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      box-shadow: none;
    }

    input[type="text"],
    input[type="number"],
    input[type="password"] {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
      background: white;
      width: 100%;
    }

    input:focus {
      outline: 2px solid rgba(108, 99, 255, 0.4);
      outline-offset: 1px;
    }

    .profile-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 16px;
    }

    .avatar {
      width: 64px;
      height: 64px;
      border-radius: 50%;
      object-fit: cover;
      border: 3px solid var(--accent);
      background: rgba(108, 99, 255, 0.12);
    }

    .profile-meta {
      display: grid;
      gap: 2px;
    }

    .profile-meta .name {
      font-weight: 600;
      font-size: 1.1rem;
    }

    .profile-meta .detail {
      color: #6b6a80;
      font-size: 0.9rem;
    }

    .login-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
      align-items: end;
    }

    .day-nav {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .day-nav input {
      width: 90px;
      text-align: center;
    }

    .timer-layout {
      display: grid;
      grid-template-columns: minmax(220px, 260px) 1fr;
      gap: 24px;
      align-items: center;
    }

    .dial-wrap {
      display: grid;
      place-items: center;
    }

    #dial {
      width: 100%;
      max-width: 240px;
    }

    .dial-track {
      fill: none;
      stroke: rgba(47, 72, 88, 0.1);
      stroke-width: 12;
    }

    .dial-progress {
      fill: none;
      stroke: var(--accent);
      stroke-width: 12;
      stroke-linecap: round;
      transform: rotate(-90deg);
      transform-origin: center;
      transition: stroke-dashoffset 300ms linear, stroke 300ms ease;
    }

    .dial-progress.break {
      stroke: var(--break);
    }

    .dial-phase {
      font-size: 15px;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      fill: #8b8a9d;
      text-anchor: middle;
    }

    .dial-clock {
      font-size: 44px;
      font-weight: 600;
      fill: var(--accent-2);
      text-anchor: middle;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .timer-controls {
      display: grid;
      gap: 16px;
    }

    .timer-buttons {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .durations {
      display: grid;
      grid-template-columns: 1fr 1fr auto;
      gap: 12px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b8a9d;
    }

    .task-form {
      display: flex;
      gap: 12px;
    }

    .task-form input {
      flex: 1;
    }

    .task-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .task {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: rgba(47, 72, 88, 0.04);
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 16px;
    }

    .task .text {
      transition: opacity 300ms ease;
    }

    .task.done .text,
    .task.completing .text {
      text-decoration: line-through;
      opacity: 0.55;
    }

    .task.done {
      background: rgba(45, 122, 75, 0.08);
      border-color: rgba(45, 122, 75, 0.2);
    }

    .task button {
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .progress-track {
      height: 12px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--break));
      width: 0%;
      transition: width 400ms ease;
    }

    .motivation {
      margin: 0;
      font-size: 0.95rem;
      color: var(--accent-2);
      font-weight: 500;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .bar-minutes {
      fill: var(--accent);
      opacity: 0.85;
    }

    .bar-completion {
      fill: var(--break);
      opacity: 0.85;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a7990;
      font-size: 11px;
    }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.85rem;
      color: #6b6a80;
    }

    .legend span::before {
      content: '';
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
    }

    .legend .minutes::before {
      background: var(--accent);
    }

    .legend .completion::before {
      background: var(--break);
    }

    .status {
      font-size: 0.95rem;
      color: #6b6a80;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6e84;
      font-size: 0.9rem;
    }

    .hidden {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .timer-layout {
        grid-template-columns: 1fr;
      }
      .durations {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>StudyFocus</h1>
      <p class="subtitle">Plan each study day, run focus sessions, and watch your progress build.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Day</span>
        <span id="day-number" class="value highlight">{{DAY}}</span>
      </div>
      <div class="stat">
        <span class="label">Studied today</span>
        <span id="studied-today" class="value">0m</span>
      </div>
      <div class="stat">
        <span class="label">Tasks done</span>
        <span id="tasks-done" class="value">0/0</span>
      </div>
    </section>

    <section class="card" id="login-card">
      <h2>Sign in</h2>
      <div class="login-grid">
        <div class="field">
          <span class="label">Username</span>
          <input type="text" id="login-username" placeholder="Your name" />
        </div>
        <div class="field">
          <span class="label">Student ID</span>
          <input type="text" id="login-student-id" placeholder="e.g. S123456" />
        </div>
        <button class="btn-primary" id="login-btn" type="button">Login</button>
      </div>
    </section>

    <section class="card hidden" id="profile-card">
      <div class="profile-row">
        <img id="avatar" class="avatar" alt="Profile picture" src="data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'%3E%3Ccircle cx='32' cy='24' r='12' fill='%236c63ff'/%3E%3Cellipse cx='32' cy='52' rx='20' ry='12' fill='%236c63ff'/%3E%3C/svg%3E" />
        <div class="profile-meta">
          <span class="name" id="profile-name"></span>
          <span class="detail" id="profile-student-id"></span>
          <span class="detail" id="location">Locating...</span>
        </div>
        <label class="btn-ghost" style="cursor: pointer;">
          Change photo
          <input type="file" id="avatar-input" accept="image/*" style="display: none;" />
        </label>
        <button class="btn-secondary" id="logout-btn" type="button">Logout</button>
      </div>
    </section>

    <section class="card">
      <h2>Study day</h2>
      <div class="day-nav">
        <button class="btn-ghost" id="prev-day" type="button">&#8592; Previous</button>
        <input type="number" id="day-input" min="1" value="{{DAY}}" />
        <button class="btn-ghost" id="go-day" type="button">Go</button>
        <button class="btn-ghost" id="next-day" type="button">Next &#8594;</button>
      </div>
    </section>

    <section class="card">
      <h2>Focus timer</h2>
      <div class="timer-layout">
        <div class="dial-wrap">
          <svg id="dial" viewBox="0 0 220 220" role="img" aria-label="Countdown dial">
            <circle class="dial-track" cx="110" cy="110" r="90" />
            <circle class="dial-progress" id="dial-progress" cx="110" cy="110" r="90" />
            <text class="dial-phase" id="dial-phase" x="110" y="86">Study Time</text>
            <text class="dial-clock" id="dial-clock" x="110" y="134">25:00</text>
          </svg>
        </div>
        <div class="timer-controls">
          <div class="timer-buttons">
            <button class="btn-primary" id="start-btn" type="button">Start</button>
            <button class="btn-secondary" id="pause-btn" type="button" disabled>Pause</button>
            <button class="btn-ghost" id="reset-btn" type="button">Reset</button>
          </div>
          <div class="durations">
            <div class="field">
              <span class="label">Study minutes</span>
              <input type="number" id="study-minutes" min="1" placeholder="25" />
            </div>
            <div class="field">
              <span class="label">Break minutes</span>
              <input type="number" id="break-minutes" min="1" placeholder="5" />
            </div>
            <button class="btn-ghost" id="apply-durations" type="button">Apply</button>
          </div>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Tasks</h2>
      <div class="task-form">
        <input type="text" id="task-input" placeholder="What will you study next?" />
        <button class="btn-primary" id="add-task-btn" type="button">Add</button>
      </div>
      <ul class="task-list" id="task-list"></ul>
      <div class="progress-track">
        <div class="progress-fill" id="day-progress"></div>
      </div>
      <p class="motivation" id="day-motivation"></p>
    </section>

    <section class="card">
      <h2>Progress history</h2>
      <div class="legend">
        <span class="minutes">Study minutes</span>
        <span class="completion">Tasks completed</span>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="History chart" role="img"></svg>
      </div>
      <p class="motivation" id="history-motivation"></p>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Sessions count toward the day they ran in. Pick any day number to plan ahead or revisit old task lists.</p>
  </main>

  <script>
    const dayNumberEl = document.getElementById('day-number');
    const studiedTodayEl = document.getElementById('studied-today');
    const tasksDoneEl = document.getElementById('tasks-done');
    const statusEl = document.getElementById('status');
    const loginCard = document.getElementById('login-card');
    const profileCard = document.getElementById('profile-card');
    const loginUsername = document.getElementById('login-username');
    const loginStudentId = document.getElementById('login-student-id');
    const profileName = document.getElementById('profile-name');
    const profileStudentId = document.getElementById('profile-student-id');
    const locationEl = document.getElementById('location');
    const avatarEl = document.getElementById('avatar');
    const avatarInput = document.getElementById('avatar-input');
    const dayInput = document.getElementById('day-input');
    const dialProgress = document.getElementById('dial-progress');
    const dialPhase = document.getElementById('dial-phase');
    const dialClock = document.getElementById('dial-clock');
    const startBtn = document.getElementById('start-btn');
    const pauseBtn = document.getElementById('pause-btn');
    const studyMinutesInput = document.getElementById('study-minutes');
    const breakMinutesInput = document.getElementById('break-minutes');
    const taskInput = document.getElementById('task-input');
    const taskListEl = document.getElementById('task-list');
    const dayProgressEl = document.getElementById('day-progress');
    const dayMotivationEl = document.getElementById('day-motivation');
    const chartEl = document.getElementById('chart');
    const historyMotivationEl = document.getElementById('history-motivation');

    const CIRCUMFERENCE = 2 * Math.PI * 90;
    dialProgress.setAttribute('stroke-dasharray', CIRCUMFERENCE.toFixed(2));

    let currentDay = Number(dayNumberEl.textContent) || 1;
    let lastPhase = 'study';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatClock = (seconds) => {
      const mins = Math.floor(seconds / 60);
      const secs = seconds % 60;
      return `${String(mins).padStart(2, '0')}:${String(secs).padStart(2, '0')}`;
    };

    const escapeHtml = (text) =>
      text
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');

    const getJson = async (path) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const postJson = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderProfile = (profile) => {
      loginCard.classList.toggle('hidden', profile.logged_in);
      profileCard.classList.toggle('hidden', !profile.logged_in);
      if (profile.logged_in) {
        profileName.textContent = profile.username;
        profileStudentId.textContent = `Student ID: ${profile.student_id}`;
        if (profile.avatar) {
          avatarEl.src = profile.avatar;
        }
      }
    };

    const renderDay = (data) => {
      currentDay = data.day;
      dayNumberEl.textContent = data.day;
      dayInput.value = data.day;
      studiedTodayEl.textContent = `${data.study_minutes}m`;
      tasksDoneEl.textContent = `${data.completed_tasks}/${data.total_tasks}`;
      dayProgressEl.style.width = `${Math.round(data.completion_ratio * 100)}%`;
      dayMotivationEl.textContent = data.motivation;

      taskListEl.innerHTML = data.tasks
        .map(
          (task) => `
        <li class="task${task.completed ? ' done' : ''}" data-id="${task.id}">
          <span class="text">${escapeHtml(task.text)}</span>
          ${task.completed ? '<span>&#10003;</span>' : '<button class="btn-ghost complete-btn" type="button">Done</button>'}
        </li>`
        )
        .join('');
    };

    const renderTimer = (data) => {
      const total = (data.phase === 'break' ? data.break_minutes : data.study_minutes) * 60;
      const fraction = total > 0 ? data.remaining_seconds / total : 0;
      dialProgress.setAttribute('stroke-dashoffset', (CIRCUMFERENCE * (1 - fraction)).toFixed(2));
      dialProgress.classList.toggle('break', data.phase === 'break');
      dialPhase.textContent = data.phase === 'break' ? 'Break Time' : 'Study Time';
      dialClock.textContent = formatClock(data.remaining_seconds);
      startBtn.disabled = data.running;
      pauseBtn.disabled = !data.running;

      // A phase flip means the server just banked a session; pick up the
      // new day totals and history.
      if (data.phase !== lastPhase) {
        lastPhase = data.phase;
        loadDay().catch(() => {});
        loadHistory().catch(() => {});
      }
    };

    const renderHistoryChart = (records) => {
      if (!records.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No sessions recorded yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;
      const plotHeight = height - top - paddingY;

      const maxMinutes = Math.max(...records.map((r) => r.study_minutes), 1);
      const groupWidth = (width - paddingX * 2) / records.length;
      const barWidth = Math.min(22, groupWidth * 0.3);

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (maxMinutes * i) / ticks;
        const yPos = height - paddingY - (value / maxMinutes) * plotHeight;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}m</text>`;
      }

      const bars = records
        .map((record, index) => {
          const center = paddingX + groupWidth * index + groupWidth / 2;
          const minutesHeight = (record.study_minutes / maxMinutes) * plotHeight;
          const completionHeight = record.completion_ratio * plotHeight;
          const minutesX = center - barWidth - 2;
          const completionX = center + 2;
          const label = `<text class="chart-label" x="${center}" y="${height - paddingY + 18}" text-anchor="middle">Day ${record.day}</text>`;
          const counts = `<text class="chart-label" x="${completionX + barWidth / 2}" y="${height - paddingY - completionHeight - 6}" text-anchor="middle">${record.completed_tasks}/${record.total_tasks}</text>`;
          return `
            <rect class="bar-minutes" x="${minutesX}" y="${height - paddingY - minutesHeight}" width="${barWidth}" height="${Math.max(minutesHeight, 1)}" rx="4" />
            <rect class="bar-completion" x="${completionX}" y="${height - paddingY - completionHeight}" width="${barWidth}" height="${Math.max(completionHeight, 1)}" rx="4" />
            ${counts}
            ${label}`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${bars}`;
    };

    const loadProfile = async () => {
      renderProfile(await getJson('/api/profile'));
    };

    const loadDay = async () => {
      renderDay(await getJson('/api/day'));
    };

    const loadTimer = async () => {
      renderTimer(await getJson('/api/timer'));
    };

    const loadHistory = async () => {
      const data = await getJson('/api/history');
      renderHistoryChart(data.records);
      historyMotivationEl.textContent = data.motivation;
    };

    const refresh = async () => {
      await Promise.all([loadProfile(), loadDay(), loadTimer(), loadHistory()]);
    };

    const switchDay = async (day) => {
      if (day < 1) {
        return;
      }
      renderDay(await postJson('/api/day', { day }));
      renderTimer(await getJson('/api/timer'));
    };

    const addTask = async () => {
      const text = taskInput.value;
      if (!text.trim()) {
        setStatus('Type a task first.', 'error');
        return;
      }
      renderDay(await postJson('/api/tasks', { text }));
      taskInput.value = '';
      setStatus('Task added.', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    document.getElementById('login-btn').addEventListener('click', () => {
      postJson('/api/login', {
        username: loginUsername.value,
        student_id: loginStudentId.value
      })
        .then(renderProfile)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      postJson('/api/logout')
        .then((profile) => {
          renderProfile(profile);
          return loadTimer();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    avatarInput.addEventListener('change', () => {
      const file = avatarInput.files[0];
      if (!file) {
        return;
      }
      const reader = new FileReader();
      reader.onload = () => {
        postJson('/api/profile/avatar', { avatar: reader.result })
          .then(renderProfile)
          .catch((err) => setStatus(err.message, 'error'));
      };
      reader.readAsDataURL(file);
    });

    document.getElementById('prev-day').addEventListener('click', () => {
      switchDay(currentDay - 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-day').addEventListener('click', () => {
      switchDay(currentDay + 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('go-day').addEventListener('click', () => {
      switchDay(Number(dayInput.value)).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-task-btn').addEventListener('click', () => {
      addTask().catch((err) => setStatus(err.message, 'error'));
    });

    taskInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        addTask().catch((err) => setStatus(err.message, 'error'));
      }
    });

    taskListEl.addEventListener('click', (event) => {
      const button = event.target.closest('.complete-btn');
      if (!button) {
        return;
      }
      const item = button.closest('.task');
      item.classList.add('completing');
      postJson(`/api/tasks/${item.dataset.id}/complete`)
        .then(renderDay)
        .catch((err) => setStatus(err.message, 'error'));
    });

    startBtn.addEventListener('click', () => {
      postJson('/api/timer/start')
        .then(renderTimer)
        .catch((err) => setStatus(err.message, 'error'));
    });

    pauseBtn.addEventListener('click', () => {
      postJson('/api/timer/pause')
        .then(renderTimer)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      postJson('/api/timer/reset')
        .then(renderTimer)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('apply-durations').addEventListener('click', () => {
      const payload = {};
      if (studyMinutesInput.value) {
        payload.study_minutes = Number(studyMinutesInput.value);
      }
      if (breakMinutesInput.value) {
        payload.break_minutes = Number(breakMinutesInput.value);
      }
      postJson('/api/timer/durations', payload)
        .then((data) => {
          renderTimer(data);
          setStatus('Durations updated.', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    if ('geolocation' in navigator) {
      navigator.geolocation.getCurrentPosition(
        (pos) => {
          locationEl.textContent = `${pos.coords.latitude.toFixed(2)}, ${pos.coords.longitude.toFixed(2)}`;
        },
        () => {
          locationEl.textContent = 'Location access denied';
        }
      );
    } else {
      locationEl.textContent = 'Geolocation not supported';
    }

    if ('serviceWorker' in navigator) {
      navigator.serviceWorker.register('/sw.js').catch(() => {});
    }

    setInterval(() => {
      loadTimer().catch(() => {});
    }, 1000);

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

pub const SW_JS: &str = r#"const CACHE_NAME = 'studyfocus-v1';
const PRECACHE = ['/'];

self.addEventListener('install', (event) => {
  event.waitUntil(caches.open(CACHE_NAME).then((cache) => cache.addAll(PRECACHE)));
  self.skipWaiting();
});

self.addEventListener('activate', (event) => {
  event.waitUntil(
    caches
      .keys()
      .then((keys) => Promise.all(keys.filter((key) => key !== CACHE_NAME).map((key) => caches.delete(key))))
  );
  self.clients.claim();
});

self.addEventListener('fetch', (event) => {
  if (event.request.method !== 'GET' || event.request.url.includes('/api/')) {
    return;
  }
  event.respondWith(caches.match(event.request).then((cached) => cached || fetch(event.request)));
});
"#;
