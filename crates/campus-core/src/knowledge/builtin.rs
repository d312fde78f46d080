//! Canned answers shipped with the assistant.
//!
//! This is the tabular knowledge set of the SmartCollege demo portal. The
//! payloads are rich text (markdown tables and emoji) and are returned as-is.

use super::Topic;

/// Suggested prompts offered next to the chat input.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What's my timetable for today?",
    "When is my next exam?",
    "What's my current attendance?",
    "Any new placement drives?",
];

const TIMETABLE: &str = "📅 **Today's Schedule (Monday, Feb 3, 2026):**

| Time | Subject | Faculty | Room |
|------|---------|---------|------|
| 9:00 AM | Data Structures | Dr. Sharma | Room 301 |
| 11:00 AM | Database Management | Prof. Gupta | Lab 2 |
| 2:00 PM | Software Engineering | Dr. Patel | Room 405 |
| 4:00 PM | Tutorial Session | TA Rahul | Room 102 |

**Tomorrow:** Operating Systems, Computer Networks, Mini Project Lab";

const EXAM: &str = "📝 **Upcoming Examinations:**

**Internal Assessments (IA-2):**
| Date | Subject | Time | Venue |
|------|---------|------|-------|
| Feb 15 | Data Structures | 10:00 AM | Hall A |
| Feb 17 | Database Management | 2:00 PM | Hall B |
| Feb 19 | Software Engineering | 10:00 AM | Hall A |
| Feb 21 | Operating Systems | 2:00 PM | Hall C |

**Semester End Exams:** April 15 - May 5, 2026

📌 **Note:** Hall tickets available from Feb 10. Collect from Exam Cell (Block A, Room 105)";

const ATTENDANCE: &str = "✅ **Your Attendance Summary (as of Feb 3, 2026):**

| Subject | Present | Total | Percentage | Status |
|---------|---------|-------|------------|--------|
| Data Structures | 34 | 40 | 85% | ✅ Safe |
| Database Management | 37 | 40 | 92% | ✅ Safe |
| Software Engineering | 31 | 40 | 78% | ⚠️ Warning |
| Operating Systems | 36 | 40 | 90% | ✅ Safe |
| Computer Networks | 33 | 40 | 82% | ✅ Safe |

**Overall Attendance:** 85.4%
**Minimum Required:** 75%

⚠️ **Alert:** Attend next 3 Software Engineering classes to reach safe zone!";

const PLACEMENT: &str = "💼 **Active Placement Drives (Feb 2026):**

**1. Google India** 🌟
   • Role: Software Engineer (L3)
   • Package: ₹32 LPA + Stocks
   • Eligibility: CGPA ≥ 8.0, No backlogs
   • Last Date: Feb 8, 2026

**2. Microsoft** 🌟
   • Role: SDE-1
   • Package: ₹28 LPA
   • Eligibility: CGPA ≥ 7.5
   • Last Date: Feb 12, 2026

**3. Infosys**
   • Role: Systems Engineer
   • Package: ₹6.5 LPA
   • Eligibility: CGPA ≥ 6.0
   • Last Date: Feb 15, 2026

**4. TCS Digital**
   • Role: Digital Engineer
   • Package: ₹9 LPA
   • Eligibility: CGPA ≥ 7.0
   • Last Date: Feb 18, 2026

**5. Amazon**
   • Role: SDE Intern (6 months + PPO)
   • Stipend: ₹60,000/month
   • Eligibility: 3rd Year, CGPA ≥ 7.5
   • Last Date: Feb 20, 2026

📍 **Upcoming Campus Visits:** Wipro (Feb 25), Accenture (Mar 2), Deloitte (Mar 8)

👉 Register via Placement Portal: placement.smartcollege.edu";

const DEFAULT: &str = "👋 Hello! I'm your **SmartCollege AI Assistant**.

I can help you with:

• 📅 **Timetable** - Today's classes, weekly schedule, room changes
• 📝 **Exams** - Dates, syllabus, hall tickets, results
• ✅ **Attendance** - Subject-wise %, shortage alerts
• 💼 **Placements** - Active drives, company details, eligibility
• 📚 **Library** - Book availability, due dates
• 💰 **Fees** - Payment status, receipts, deadlines

Just type your question or tap a quick option below!";

/// Returns the builtin `(topic, body)` pairs, one per topic.
pub(crate) fn builtin_entries() -> [(Topic, &'static str); 5] {
    [
        (Topic::Timetable, TIMETABLE),
        (Topic::Exam, EXAM),
        (Topic::Attendance, ATTENDANCE),
        (Topic::Placement, PLACEMENT),
        (Topic::Default, DEFAULT),
    ]
}
