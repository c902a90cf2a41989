//! The capture screen, embedded as string constants.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Muure Positioner</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<header>
  <span class="mark">&#9829;</span>
  <h1>Muure</h1>
</header>
<main>
  <form id="capture" autocomplete="off">
    <label for="latitude">Latitude</label>
    <input id="latitude" type="text" placeholder="Enter latitude">
    <label for="longitude">Longitude</label>
    <input id="longitude" type="text" placeholder="Enter longitude">
    <div class="actions">
      <button type="button" id="locate">Use my location</button>
      <button type="submit" id="update">Update</button>
    </div>
    <p id="message" hidden></p>
  </form>
</main>
<script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"* { box-sizing: border-box; }
body {
  margin: 0;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  background: #fff;
  color: #000;
  font-family: system-ui, sans-serif;
}
header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1.5rem 2rem;
  border-bottom: 1px solid #000;
}
header h1 { margin: 0; font-size: 1.8rem; }
header .mark { font-size: 1.8rem; }
main {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}
form { width: 100%; max-width: 28rem; }
label { display: block; margin: 1rem 0 0.5rem; font-weight: 500; }
input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 2px solid #000;
  background: #fff;
  font-size: 1rem;
}
input:focus { outline: 2px solid #000; }
.actions { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
button {
  flex: 1;
  padding: 0.75rem 1rem;
  border: 2px solid #000;
  background: #000;
  color: #fff;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
}
button#locate { background: #fff; color: #000; }
button:disabled { background: #9ca3af; border-color: #9ca3af; cursor: default; }
#message { margin-top: 1.5rem; text-align: center; font-size: 0.9rem; }
"#;

pub const APP_JS: &str = r#"const latitudeField = document.getElementById('latitude');
const longitudeField = document.getElementById('longitude');
const locateButton = document.getElementById('locate');
const updateButton = document.getElementById('update');
const messageLine = document.getElementById('message');

let busy = false;

function show(text) {
  messageLine.textContent = text;
  messageLine.hidden = !text;
}

async function locate() {
  locateButton.disabled = true;
  locateButton.textContent = 'Locating…';
  try {
    const response = await fetch('/api/position');
    const body = await response.json();
    if (!response.ok) {
      show(body.error || 'Position unavailable');
      return;
    }
    latitudeField.value = String(body.latitude);
    longitudeField.value = String(body.longitude);
    show('');
  } catch (err) {
    show('Error: ' + err.message);
  } finally {
    locateButton.disabled = false;
    locateButton.textContent = 'Use my location';
  }
}

async function update(event) {
  event.preventDefault();
  if (busy) return;
  if (!latitudeField.value || !longitudeField.value) {
    show('Please enter both latitude and longitude');
    return;
  }

  busy = true;
  updateButton.disabled = true;
  updateButton.textContent = 'Updating…';
  show('');
  try {
    const response = await fetch('/api/coordinates', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        latitude: latitudeField.value,
        longitude: longitudeField.value,
      }),
    });
    const body = await response.json();
    if (!response.ok) {
      show(body.error || 'Error');
      return;
    }
    show(body.message);
    latitudeField.value = '';
    longitudeField.value = '';
  } catch (err) {
    show('Error: ' + err.message);
  } finally {
    busy = false;
    updateButton.disabled = false;
    updateButton.textContent = 'Update';
  }
}

locateButton.addEventListener('click', locate);
document.getElementById('capture').addEventListener('submit', update);
"#;
