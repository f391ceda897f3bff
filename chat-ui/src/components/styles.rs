pub const APP_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--background, #0F1115);
    color: var(--primary-text, #E5E7EB);
}

/* Shell Layout */
.chat-shell {
    display: flex;
    height: 100vh;
    width: 100%;
    background: var(--background, #0F1115);
    overflow: hidden;
}

.chat-main {
    flex: 1;
    min-width: 0;
    display: flex;
    flex-direction: column;
}

/* Header */
.chat-header {
    padding: 1rem 1.5rem;
    border-bottom: 1px solid var(--border-color, #2D2D2D);
    flex-shrink: 0;
}

.chat-header h1 {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--primary-text, #E5E7EB);
}

/* Sidebar */
.sidebar {
    display: flex;
    flex-direction: column;
    width: 280px;
    flex-shrink: 0;
    height: 100vh;
    background: var(--sidebar-bg, #1A1D23);
    border-right: 1px solid var(--border-color, #2D2D2D);
}

.sidebar-top {
    padding: 1rem;
}

.new-chat-button {
    width: 100%;
    border: none;
    border-radius: 0.375rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    background: var(--button-bg, #2563EB);
    color: var(--primary-text, #E5E7EB);
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.new-chat-button:hover {
    background: var(--button-hover-bg, #1D4ED8);
}

.chat-list {
    flex: 1;
    overflow-y: auto;
    padding: 0 0.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.chat-list::-webkit-scrollbar {
    width: 6px;
}

.chat-list::-webkit-scrollbar-thumb {
    background: var(--border-color, #2D2D2D);
    border-radius: 3px;
}

.chat-list-item {
    display: block;
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    color: var(--primary-text, #E5E7EB);
    text-decoration: none;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
    transition: background-color 0.15s ease;
}

.chat-list-item:hover {
    background: var(--sidebar-hover, #2A2E38);
}

.chat-list-item.active {
    background: var(--sidebar-hover, #2A2E38);
}

.chat-list-empty {
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    color: var(--secondary-text, #9CA3AF);
}

.sidebar-footer {
    padding: 1rem;
    border-top: 1px solid var(--border-color, #2D2D2D);
}

.settings-link {
    display: block;
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.875rem;
    color: var(--secondary-text, #9CA3AF);
    text-decoration: none;
    transition: background-color 0.15s ease;
}

.settings-link:hover {
    background: var(--sidebar-hover, #2A2E38);
    color: var(--primary-text, #E5E7EB);
}

/* Message Feed */
.message-feed {
    flex: 1;
    overflow-y: auto;
    overflow-x: hidden;
    padding: 1.5rem;
    scroll-behavior: smooth;
}

.message-feed::-webkit-scrollbar {
    width: 6px;
}

.message-feed::-webkit-scrollbar-track {
    background: transparent;
}

.message-feed::-webkit-scrollbar-thumb {
    background: var(--border-color, #2D2D2D);
    border-radius: 3px;
}

.message-list {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    max-width: 48rem;
    margin: 0 auto;
}

/* Message Row */
.message-row {
    display: flex;
    gap: 0.75rem;
    max-width: 100%;
}

.user-row {
    flex-direction: row-reverse;
}

.assistant-row {
    flex-direction: row;
}

/* Avatar */
.avatar {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    font-weight: 600;
    flex-shrink: 0;
}

.user-avatar {
    background: var(--button-bg, #2563EB);
    color: var(--input-text, #F9FAFB);
}

.assistant-avatar {
    background: var(--assistant-bubble, #1F2937);
    color: var(--secondary-text, #9CA3AF);
    border: 1px solid var(--border-color, #2D2D2D);
}

/* Message Content */
.message-content {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    max-width: calc(75% - 3rem);
}

.user-row .message-content {
    align-items: flex-end;
}

.assistant-row .message-content {
    align-items: flex-start;
}

/* Message Header */
.message-header {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
}

.user-row .message-header {
    flex-direction: row-reverse;
}

.sender-name {
    font-weight: 500;
    color: var(--secondary-text, #9CA3AF);
}

.message-time {
    color: var(--secondary-text, #9CA3AF);
}

/* Message Bubble */
.message-bubble {
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid var(--border-color, #2D2D2D);
    font-size: 0.875rem;
    line-height: 1.5;
    white-space: pre-wrap;
    word-wrap: break-word;
    max-width: 100%;
    color: var(--primary-text, #E5E7EB);
}

.user-bubble {
    background: var(--user-bubble, #374151);
    border-bottom-right-radius: 0.25rem;
}

.assistant-bubble {
    background: var(--assistant-bubble, #1F2937);
    border-bottom-left-radius: 0.25rem;
}

/* Typing Indicator */
.typing-indicator {
    display: flex;
    gap: 0.25rem;
    padding: 1rem;
    background: var(--assistant-bubble, #1F2937);
    border: 1px solid var(--border-color, #2D2D2D);
    border-radius: 0.75rem;
    border-bottom-left-radius: 0.25rem;
    width: fit-content;
}

.typing-indicator span {
    width: 0.5rem;
    height: 0.5rem;
    background: var(--secondary-text, #9CA3AF);
    border-radius: 50%;
    animation: typing-bounce 1.4s infinite ease-in-out both;
}

.typing-indicator span:nth-child(1) { animation-delay: -0.32s; }
.typing-indicator span:nth-child(2) { animation-delay: -0.16s; }

@keyframes typing-bounce {
    0%, 80%, 100% { transform: scale(0); }
    40% { transform: scale(1); }
}

/* Chat Input Area */
.chat-input-area {
    padding: 0 1.5rem;
    flex-shrink: 0;
}

.chat-input-bar {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    width: 100%;
    max-width: 48rem;
    margin: 0 auto;
    padding: 1rem 0;
    border-top: 1px solid var(--border-color, #2D2D2D);
}

.chat-input {
    flex: 1;
    border: 1px solid var(--border-color, #2D2D2D);
    border-radius: 0.75rem;
    padding: 0.75rem 1rem;
    font-size: 0.875rem;
    background: var(--input-bg, #111827);
    color: var(--input-text, #F9FAFB);
    outline: none;
}

.chat-input::placeholder {
    color: var(--secondary-text, #9CA3AF);
}

.chat-input:focus {
    border-color: var(--button-bg, #2563EB);
}

.send-button {
    border: none;
    border-radius: 0.375rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 500;
    background: var(--button-bg, #2563EB);
    color: var(--primary-text, #E5E7EB);
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.send-button:hover:not(:disabled) {
    background: var(--button-hover-bg, #1D4ED8);
}

.send-button:disabled {
    background: var(--border-color, #2D2D2D);
    color: var(--secondary-text, #9CA3AF);
    cursor: not-allowed;
}

/* Landing */
.landing {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 1.5rem;
    background: var(--background, #0F1115);
}

.landing-card {
    width: 100%;
    max-width: 36rem;
    text-align: center;
}

.landing-card h1 {
    margin: 0 0 0.5rem 0;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary-text, #E5E7EB);
}

.landing-tagline {
    margin: 0 0 1.5rem 0;
    font-size: 0.875rem;
    color: var(--secondary-text, #9CA3AF);
}

.start-button {
    border: none;
    border-radius: 0.375rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 500;
    background: var(--button-bg, #2563EB);
    color: var(--primary-text, #E5E7EB);
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.start-button:hover {
    background: var(--button-hover-bg, #1D4ED8);
}

/* Settings */
.settings-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--background, #0F1115);
}

.settings-main {
    width: 100%;
    max-width: 48rem;
    margin: 0 auto;
    flex: 1;
    padding: 1.5rem;
}

.settings-section {
    margin-bottom: 1.5rem;
}

.settings-section h2 {
    margin: 0 0 0.5rem 0;
    font-size: 1rem;
    font-weight: 600;
    color: var(--primary-text, #E5E7EB);
}

.settings-card {
    border: 1px solid var(--border-color, #2D2D2D);
    border-radius: 0.375rem;
    padding: 1rem;
    font-size: 0.875rem;
    color: var(--secondary-text, #9CA3AF);
    background: var(--assistant-bubble, #1F2937);
}

.settings-back {
    margin-top: 2rem;
}

.back-link {
    display: inline-block;
    border-radius: 0.375rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    background: var(--button-bg, #2563EB);
    color: var(--primary-text, #E5E7EB);
    text-decoration: none;
    transition: background-color 0.15s ease;
}

.back-link:hover {
    background: var(--button-hover-bg, #1D4ED8);
}
"#;
