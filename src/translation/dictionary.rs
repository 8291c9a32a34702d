/*!
 * Built-in English to Arabic word lists.
 *
 * `TERMINOLOGY` holds curated product and documentation vocabulary and is
 * always applied. `LEXICAL` is a broad word-for-word list used only as a
 * last resort when a text is still mostly Latin after the other rules.
 * Order within a list does not matter: the substitution engine sorts phrases
 * longest-first and resolves duplicate keys in favour of the later entry.
 */

/// Curated terminology, including multi-word phrase cues
pub const TERMINOLOGY: &[(&str, &str)] = &[
    ("repository", "المستودع"),
    ("repositories", "المستودعات"),
    ("commit", "الالتزام"),
    ("commits", "الالتزامات"),
    ("pull request", "طلب السحب"),
    ("pull requests", "طلبات السحب"),
    ("issue", "القضية"),
    ("issues", "القضايا"),
    ("branch", "الفرع"),
    ("branches", "الفروع"),
    ("merge", "الدمج"),
    ("fork", "النسخة المتفرعة"),
    ("clone", "الاستنساخ"),
    ("push", "الدفع"),
    ("fetch", "الجلب"),
    ("workflow", "سير العمل"),
    ("workflows", "سير العمل"),
    ("authentication", "المصادقة"),
    ("authorization", "التخويل"),
    ("token", "رمز الوصول"),
    ("tokens", "الرموز المميزة"),
    ("API key", "مفتاح API"),
    ("SSH key", "مفتاح SSH"),
    ("OAuth", "OAuth"),
    ("two-factor authentication", "المصادقة ثنائية العامل"),
    ("2FA", "المصادقة ثنائية العامل"),
    ("passkey", "مفتاح المرور"),
    ("passkeys", "مفاتيح المرور"),
    ("single sign-on", "تسجيل الدخول الموحد"),
    ("SSO", "تسجيل الدخول الموحد"),
    ("GitHub Actions", "GitHub Actions"),
    ("action", "الإجراء"),
    ("actions", "الإجراءات"),
    ("runner", "المشغل"),
    ("runners", "المشغلون"),
    ("job", "المهمة"),
    ("jobs", "المهام"),
    ("step", "الخطوة"),
    ("steps", "الخطوات"),
    ("artifact", "المنتج"),
    ("artifacts", "المنتجات"),
    ("deployment", "النشر"),
    ("continuous integration", "التكامل المستمر"),
    ("CI/CD", "CI/CD"),
    ("build", "البناء"),
    ("organization", "المنظمة"),
    ("organizations", "المنظمات"),
    ("team", "الفريق"),
    ("teams", "الفرق"),
    ("member", "العضو"),
    ("members", "الأعضاء"),
    ("owner", "المالك"),
    ("admin", "المسؤول"),
    ("collaborator", "المتعاون"),
    ("collaborators", "المتعاونون"),
    ("code", "الكود"),
    ("source code", "الكود المصدري"),
    ("codebase", "قاعدة الكود"),
    ("developer", "المطور"),
    ("developers", "المطورون"),
    ("development", "التطوير"),
    ("programming", "البرمجة"),
    ("software", "البرمجيات"),
    ("application", "التطبيق"),
    ("project", "المشروع"),
    ("file", "الملف"),
    ("files", "الملفات"),
    ("folder", "المجلد"),
    ("directory", "الدليل"),
    ("git", "Git"),
    ("version control", "التحكم في الإصدارات"),
    ("staging", "التجهيز"),
    ("stash", "المخزن المؤقت"),
    ("diff", "الفرق"),
    ("log", "السجل"),
    ("remote", "البعيد"),
    ("origin", "الأصل"),
    ("upstream", "المنبع"),
    ("downstream", "المصب"),
    ("API", "API"),
    ("URL", "URL"),
    ("HTTP", "HTTP"),
    ("HTTPS", "HTTPS"),
    ("JSON", "JSON"),
    ("YAML", "YAML"),
    ("markdown", "Markdown"),
    ("command line", "سطر الأوامر"),
    ("terminal", "الطرفية"),
    ("shell", "الصدفة"),
    ("script", "النص البرمجي"),
    ("configuration", "التكوين"),
    ("settings", "الإعدادات"),
    ("permissions", "الأذونات"),
    ("access", "الوصول"),
    ("security", "الأمان"),
    ("privacy", "الخصوصية"),
    ("access token", "رمز الوصول"),
    ("access tokens", "رموز الوصول"),
    ("user access token", "رمز وصول المستخدم"),
    ("user access tokens", "رموز وصول المستخدم"),
    ("installation access token", "رمز وصول التثبيت"),
    ("installation access tokens", "رموز وصول التثبيت"),
    ("create", "إنشاء"),
    ("delete", "حذف"),
    ("update", "تحديث"),
    ("edit", "تحرير"),
    ("manage", "إدارة"),
    ("configure", "تكوين"),
    ("setup", "إعداد"),
    ("install", "تثبيت"),
    ("deploy", "نشر"),
    ("publish", "نشر"),
    ("share", "مشاركة"),
    ("collaborate", "التعاون"),
    ("contribute", "المساهمة"),
    ("review", "مراجعة"),
    ("approve", "الموافقة"),
    ("reject", "رفض"),
    ("getting started", "البدء"),
    ("quick start", "البدء السريع"),
    ("learn more", "تعلم المزيد"),
    ("read more", "اقرأ المزيد"),
    ("see also", "انظر أيضًا"),
    ("for more information", "لمزيد من المعلومات"),
    ("best practices", "أفضل الممارسات"),
    ("troubleshooting", "استكشاف الأخطاء وإصلاحها"),
    ("documentation", "المستندات"),
    ("tutorial", "الدرس التعليمي"),
    ("guide", "الدليل"),
    ("example", "مثال"),
    ("examples", "أمثلة"),
    ("libraries", "المكتبات"),
    ("network configurations", "تكوينات الشبكة"),
    ("codes of conduct", "مدونات السلوك"),
    ("code of conduct", "مدونة السلوك"),
    ("anti-bribery", "مكافحة الرشوة"),
    ("modern slavery", "العبودية الحديثة"),
    ("child labor", "عمل الأطفال"),
    ("subprocessors", "معالجات فرعية"),
    ("subprocessor", "معالج فرعي"),
    ("embeddings", "تضمينات"),
    ("keyboard shortcuts", "اختصارات لوحة المفاتيح"),
    ("overview", "نظرة عامة"),
    ("summary", "الملخص"),
    ("prerequisites", "المتطلبات المسبقة"),
    ("note", "ملاحظة"),
    ("tip", "نصيحة"),
    ("caution", "تحذير"),
    ("warning", "تحذير"),
    ("this guide", "هذا الدليل"),
    ("about github", "حول GitHub"),
    ("in your", "في الخاص بك"),
    ("before you begin", "قبل أن تبدأ"),
    ("at this stage", "في هذه المرحلة"),
    ("for example", "على سبيل المثال"),
    ("by updating", "عن طريق تحديث"),
    ("by default", "افتراضيًا"),
    ("to get started", "للبدء"),
    ("you can now", "يمكنك الآن"),
    ("next steps", "الخطوات التالية"),
    ("account and profile", "الحساب والملف الشخصي"),
    ("support", "الدعم"),
    ("reference", "المرجع"),
    ("get started", "ابدأ"),
    ("how to", "كيفية"),
    ("pull", "السحب"),
];

/// Word-for-word fallback vocabulary
pub const LEXICAL: &[(&str, &str)] = &[
    ("you", "أنت"),
    ("your", "الخاص بك"),
    ("we", "نحن"),
    ("they", "هم"),
    ("it", "هو"),
    ("this", "هذا"),
    ("that", "ذلك"),
    ("these", "هذه"),
    ("those", "تلك"),
    ("is", "هو"),
    ("are", "هي"),
    ("was", "كان"),
    ("were", "كانت"),
    ("be", "يكون"),
    ("been", "كان"),
    ("will", "سوف"),
    ("should", "يجب"),
    ("must", "يجب"),
    ("can", "يمكن"),
    ("could", "يمكن"),
    ("may", "قد"),
    ("might", "قد"),
    ("not", "ليس"),
    ("and", "و"),
    ("or", "أو"),
    ("but", "لكن"),
    ("if", "إذا"),
    ("when", "عند"),
    ("where", "حيث"),
    ("how", "كيف"),
    ("what", "ما"),
    ("why", "لماذا"),
    ("to", "إلى"),
    ("from", "من"),
    ("for", "لـ"),
    ("with", "مع"),
    ("without", "بدون"),
    ("in", "في"),
    ("on", "على"),
    ("by", "بواسطة"),
    ("of", "من"),
    ("as", "كـ"),
    ("about", "حول"),
    ("before", "قبل"),
    ("after", "بعد"),
    ("between", "بين"),
    ("within", "ضمن"),
    ("using", "باستخدام"),
    ("into", "إلى"),
    ("over", "فوق"),
    ("under", "تحت"),
    ("through", "عبر"),
    ("via", "عبر"),
    ("create", "إنشاء"),
    ("created", "تم الإنشاء"),
    ("delete", "حذف"),
    ("deleted", "تم الحذف"),
    ("update", "تحديث"),
    ("updated", "تم التحديث"),
    ("edit", "تحرير"),
    ("open", "فتح"),
    ("close", "إغلاق"),
    ("closed", "مغلق"),
    ("click", "انقر"),
    ("select", "حدد"),
    ("choose", "اختر"),
    ("go", "اذهب"),
    ("enable", "تمكين"),
    ("enabled", "مُمكّن"),
    ("disable", "تعطيل"),
    ("disabled", "مُعطّل"),
    ("configure", "تكوين"),
    ("settings", "الإعدادات"),
    ("setting", "الإعداد"),
    ("manage", "إدارة"),
    ("management", "إدارة"),
    ("view", "عرض"),
    ("see", "انظر"),
    ("learn", "تعلم"),
    ("install", "تثبيت"),
    ("upgrade", "ترقية"),
    ("sign", "تسجيل"),
    ("sign in", "تسجيل الدخول"),
    ("sign out", "تسجيل الخروج"),
    ("log in", "تسجيل الدخول"),
    ("log out", "تسجيل الخروج"),
    ("save", "حفظ"),
    ("apply", "تطبيق"),
    ("run", "تشغيل"),
    ("build", "بناء"),
    ("test", "اختبار"),
    ("deploy", "نشر"),
    ("publish", "نشر"),
    ("allows", "يسمح"),
    ("allow", "يسمح"),
    ("exchange", "تبادل"),
    ("short-lived", "قصيرة الأجل"),
    ("directly", "مباشرة"),
    ("cloud", "السحابة"),
    ("provider", "المزوّد"),
    ("providers", "المزوّدون"),
    ("in your", "في الخاص بك"),
    ("before you begin", "قبل أن تبدأ"),
    ("at this stage", "في هذه المرحلة"),
    ("for example", "على سبيل المثال"),
    ("by updating", "عن طريق تحديث"),
    ("by default", "افتراضيًا"),
    ("to get started", "للبدء"),
    ("you can now", "يمكنك الآن"),
    ("next steps", "الخطوات التالية"),
    ("use", "استخدم"),
    ("usage", "الاستخدام"),
    ("instruction", "تعليمات"),
    ("instructions", "تعليمات"),
    ("installing", "تثبيت"),
    ("package", "حزمة"),
    ("packages", "حزم"),
    ("dependency", "اعتمادية"),
    ("dependencies", "اعتماديات"),
    ("search", "ابحث"),
    ("find", "العثور"),
    ("supported", "مدعوم"),
    ("client", "عميل"),
    ("instance", "مثيل"),
    ("specific", "محدد"),
    ("working", "العمل"),
    ("registry", "السجل"),
    ("billing", "الفوترة"),
    ("platform", "المنصة"),
    ("roles", "أدوار"),
    ("role", "دور"),
    ("promotion", "عرض ترويجي"),
    ("promotions", "عروض ترويجية"),
    ("discount", "خصم"),
    ("discounts", "خصومات"),
    ("csv", "CSV"),
    ("report", "تقرير"),
    ("reports", "تقارير"),
    ("codeql", "CodeQL"),
    ("cli", "CLI"),
    ("database", "قاعدة بيانات"),
    ("analyze", "تحليل"),
    ("bundle", "حزمة"),
    ("cleanup", "تنظيف"),
    ("import", "استيراد"),
    ("export", "تصدير"),
    ("finalize", "إنهاء"),
    ("resolve", "حل"),
    ("query", "استعلام"),
    ("format", "تنسيق"),
    ("metadata", "بيانات وصفية"),
    ("version", "إصدار"),
    ("server", "خادم"),
    ("language", "لغة"),
    ("pack", "حزمة"),
    ("decompile", "فك تجميع"),
    ("token", "الرمز"),
    ("endpoint", "نقطة نهاية"),
    ("endpoints", "نقاط نهاية"),
    ("available", "متاحة"),
    ("access", "الوصول"),
    ("chat", "الدردشة"),
    ("decode", "فك ترميز"),
    ("hash", "تجزئة"),
    ("interpret", "تفسير"),
    ("diagnostic", "تشخيص"),
    ("diagnostics", "تشخيصات"),
    ("dataset", "مجموعة بيانات"),
    ("datasets", "مجموعات بيانات"),
    ("measure", "قياس"),
    ("predicate", "مسند"),
    ("extensible", "قابل للتوسعة"),
    ("execute", "تنفيذ"),
    ("generate", "إنشاء"),
    ("help", "مساعدة"),
    ("add", "إضافة"),
    ("viewing", "عرض"),
    ("description", "وصف"),
    ("data", "بيانات"),
    ("bypass", "تجاوز"),
    ("delegated", "مفوّض"),
    ("protection", "حماية"),
    ("push", "دفع"),
    ("upgrades", "ترقيات"),
    ("synchronization", "مزامنة"),
    ("synchronize", "مزامنة"),
    ("time synchronization", "مزامنة الوقت"),
    ("deleting", "حذف"),
    ("library", "مكتبة"),
    ("libraries", "مكتبات"),
    ("insights", "رؤى"),
    ("exporting", "تصدير"),
    ("account", "الحساب"),
    ("profile", "الملف الشخصي"),
    ("organization", "المنظمة"),
    ("user", "المستخدم"),
    ("members", "الأعضاء"),
    ("member", "العضو"),
    ("owner", "المالك"),
    ("team", "الفريق"),
    ("project", "المشروع"),
    ("preferences", "التفضيلات"),
    ("email", "البريد الإلكتروني"),
    ("security", "الأمان"),
    ("privacy", "الخصوصية"),
    ("permissions", "الأذونات"),
    ("password", "كلمة المرور"),
    ("passkey", "مفتاح المرور"),
    ("branch", "فرع"),
    ("branches", "فروع"),
    ("commit", "التزام"),
    ("issue", "قضية"),
    ("pull", "سحب"),
    ("request", "طلب"),
    ("workflow", "سير العمل"),
    ("runner", "مشغل"),
    ("artifact", "منتج"),
    ("actions", "إجراءات"),
    ("copilot", "Copilot"),
    ("codespaces", "Codespaces"),
    ("overview", "نظرة عامة"),
    ("summary", "الملخص"),
    ("prerequisites", "المتطلبات المسبقة"),
    ("warning", "تحذير"),
    ("caution", "تحذير"),
    ("tip", "نصيحة"),
    ("note", "ملاحظة"),
    ("all", "كل"),
    ("any", "أي"),
    ("each", "كل"),
    ("every", "كل"),
    ("some", "بعض"),
    ("many", "العديد من"),
    ("more", "المزيد"),
    ("most", "معظم"),
    ("other", "أخرى"),
    ("another", "آخر"),
    ("same", "نفس"),
    ("new", "جديد"),
    ("old", "قديم"),
    ("first", "الأول"),
    ("last", "الأخير"),
    ("next", "التالي"),
    ("previous", "السابق"),
    ("only", "فقط"),
    ("also", "أيضًا"),
    ("then", "ثم"),
    ("now", "الآن"),
    ("here", "هنا"),
    ("there", "هناك"),
    ("again", "مرة أخرى"),
    ("always", "دائمًا"),
    ("never", "أبدًا"),
    ("often", "غالبًا"),
    ("already", "بالفعل"),
    ("still", "لا يزال"),
    ("yet", "بعد"),
    ("than", "من"),
    ("such", "مثل"),
    ("like", "مثل"),
    ("which", "التي"),
    ("who", "من"),
    ("whose", "الذي"),
    ("whom", "الذي"),
    ("their", "الخاصة بهم"),
    ("them", "هم"),
    ("our", "الخاص بنا"),
    ("us", "نحن"),
    ("its", "الخاص به"),
    ("has", "لديه"),
    ("have", "لديك"),
    ("had", "كان لديه"),
    ("do", "افعل"),
    ("does", "يفعل"),
    ("did", "فعل"),
    ("done", "تم"),
    ("get", "احصل"),
    ("gets", "يحصل"),
    ("got", "حصل"),
    ("make", "اجعل"),
    ("makes", "يجعل"),
    ("need", "تحتاج"),
    ("needs", "يحتاج"),
    ("want", "تريد"),
    ("know", "اعرف"),
    ("understand", "افهم"),
    ("include", "تضمين"),
    ("includes", "يتضمن"),
    ("including", "بما في ذلك"),
    ("contain", "يحتوي"),
    ("contains", "يحتوي"),
    ("provide", "توفير"),
    ("provides", "يوفر"),
    ("require", "يتطلب"),
    ("requires", "يتطلب"),
    ("required", "مطلوب"),
    ("optional", "اختياري"),
    ("specify", "حدد"),
    ("specified", "محدد"),
    ("define", "حدد"),
    ("defined", "محدد"),
    ("change", "تغيير"),
    ("changes", "التغييرات"),
    ("changed", "تم التغيير"),
    ("remove", "إزالة"),
    ("removed", "تمت الإزالة"),
    ("rename", "إعادة تسمية"),
    ("move", "نقل"),
    ("copy", "نسخ"),
    ("paste", "لصق"),
    ("type", "اكتب"),
    ("enter", "أدخل"),
    ("submit", "إرسال"),
    ("send", "إرسال"),
    ("receive", "استلام"),
    ("display", "عرض"),
    ("show", "إظهار"),
    ("hide", "إخفاء"),
    ("check", "تحقق"),
    ("verify", "تحقق"),
    ("confirm", "تأكيد"),
    ("cancel", "إلغاء"),
    ("continue", "متابعة"),
    ("start", "بدء"),
    ("stop", "إيقاف"),
    ("restart", "إعادة تشغيل"),
    ("wait", "انتظر"),
    ("connect", "اتصال"),
    ("disconnect", "قطع الاتصال"),
    ("download", "تنزيل"),
    ("upload", "رفع"),
    ("invite", "دعوة"),
    ("assign", "تعيين"),
    ("requests", "الطلبات"),
    ("comment", "تعليق"),
    ("comments", "التعليقات"),
    ("label", "تسمية"),
    ("labels", "التسميات"),
    ("milestone", "مرحلة رئيسية"),
    ("notification", "إشعار"),
    ("notifications", "الإشعارات"),
    ("message", "رسالة"),
    ("messages", "الرسائل"),
    ("page", "الصفحة"),
    ("pages", "الصفحات"),
    ("site", "الموقع"),
    ("website", "الموقع الإلكتروني"),
    ("link", "رابط"),
    ("links", "الروابط"),
    ("button", "زر"),
    ("menu", "القائمة"),
    ("tab", "علامة التبويب"),
    ("sidebar", "الشريط الجانبي"),
    ("dropdown", "القائمة المنسدلة"),
    ("field", "الحقل"),
    ("fields", "الحقول"),
    ("option", "خيار"),
    ("options", "خيارات"),
    ("list", "قائمة"),
    ("table", "جدول"),
    ("section", "القسم"),
    ("sections", "الأقسام"),
    ("article", "المقال"),
    ("articles", "المقالات"),
    ("content", "المحتوى"),
    ("text", "النص"),
    ("name", "الاسم"),
    ("title", "العنوان"),
    ("value", "القيمة"),
    ("values", "القيم"),
    ("key", "المفتاح"),
    ("keys", "المفاتيح"),
    ("secret", "سر"),
    ("secrets", "الأسرار"),
    ("variable", "متغير"),
    ("variables", "المتغيرات"),
    ("environment", "البيئة"),
    ("environments", "البيئات"),
    ("event", "حدث"),
    ("events", "الأحداث"),
    ("trigger", "مشغّل"),
    ("triggers", "المشغلات"),
    ("status", "الحالة"),
    ("state", "الحالة"),
    ("result", "النتيجة"),
    ("results", "النتائج"),
    ("error", "خطأ"),
    ("errors", "الأخطاء"),
    ("problem", "مشكلة"),
    ("problems", "المشكلات"),
    ("feature", "ميزة"),
    ("features", "الميزات"),
    ("tool", "أداة"),
    ("tools", "الأدوات"),
    ("service", "خدمة"),
    ("services", "الخدمات"),
    ("system", "النظام"),
    ("network", "الشبكة"),
    ("device", "الجهاز"),
    ("devices", "الأجهزة"),
    ("computer", "الكمبيوتر"),
    ("browser", "المتصفح"),
    ("machine", "الجهاز"),
    ("image", "الصورة"),
    ("images", "الصور"),
    ("container", "الحاوية"),
    ("containers", "الحاويات"),
    ("template", "القالب"),
    ("templates", "القوالب"),
    ("release", "الإصدار"),
    ("releases", "الإصدارات"),
    ("tag", "العلامة"),
    ("tags", "العلامات"),
    ("history", "السجل"),
    ("change log", "سجل التغييرات"),
    ("policy", "السياسة"),
    ("policies", "السياسات"),
    ("rule", "القاعدة"),
    ("rules", "القواعد"),
    ("ruleset", "مجموعة القواعد"),
    ("rulesets", "مجموعات القواعد"),
    ("review", "مراجعة"),
    ("reviews", "المراجعات"),
    ("reviewer", "المراجع"),
    ("reviewers", "المراجعون"),
    ("approval", "الموافقة"),
    ("vulnerability", "ثغرة أمنية"),
    ("vulnerabilities", "الثغرات الأمنية"),
    ("alert", "تنبيه"),
    ("alerts", "التنبيهات"),
    ("scan", "فحص"),
    ("scanning", "الفحص"),
    ("advisory", "استشارة"),
    ("advisories", "الاستشارات"),
    ("license", "الترخيص"),
    ("licenses", "التراخيص"),
    ("plan", "الخطة"),
    ("plans", "الخطط"),
    ("subscription", "الاشتراك"),
    ("payment", "الدفع"),
    ("invoice", "الفاتورة"),
    ("limit", "الحد"),
    ("limits", "الحدود"),
    ("storage", "التخزين"),
    ("minutes", "الدقائق"),
    ("enterprise", "المؤسسة"),
    ("enterprises", "المؤسسات"),
    ("company", "الشركة"),
    ("customer", "العميل"),
    ("customers", "العملاء"),
    ("administrator", "المسؤول"),
    ("administrators", "المسؤولون"),
    ("users", "المستخدمين"),
    ("people", "الأشخاص"),
    ("person", "الشخص"),
    ("contributor", "المساهم"),
    ("contributors", "المساهمون"),
    ("community", "المجتمع"),
    ("discussion", "المناقشة"),
    ("discussions", "المناقشات"),
    ("wiki", "الويكي"),
    ("gist", "المقتطف"),
    ("gists", "المقتطفات"),
    ("app", "التطبيق"),
    ("apps", "التطبيقات"),
    ("integration", "التكامل"),
    ("integrations", "عمليات التكامل"),
    ("webhook", "خطاف الويب"),
    ("webhooks", "خطافات الويب"),
    ("extension", "الإضافة"),
    ("extensions", "الإضافات"),
    ("editor", "المحرر"),
    ("desktop", "سطح المكتب"),
    ("mobile", "الجوال"),
    ("web", "الويب"),
    ("online", "عبر الإنترنت"),
    ("local", "المحلي"),
    ("remote", "البعيد"),
    ("public", "عام"),
    ("private", "خاص"),
    ("internal", "داخلي"),
    ("external", "خارجي"),
    ("secure", "آمن"),
    ("default", "افتراضي"),
    ("custom", "مخصص"),
    ("personal", "شخصي"),
    ("global", "عام"),
    ("current", "الحالي"),
    ("existing", "الموجود"),
    ("different", "مختلف"),
    ("multiple", "متعدد"),
    ("single", "واحد"),
    ("important", "مهم"),
    ("additional", "إضافي"),
    ("more information", "مزيد من المعلومات"),
    ("information", "المعلومات"),
    ("details", "التفاصيل"),
    ("example", "مثال"),
    ("examples", "أمثلة"),
    ("step", "خطوة"),
    ("steps", "خطوات"),
    ("process", "العملية"),
    ("method", "الطريقة"),
    ("methods", "الطرق"),
    ("way", "الطريقة"),
    ("ways", "الطرق"),
    ("support", "الدعم"),
    ("supports", "يدعم"),
    ("reference", "المرجع"),
    ("guide", "دليل"),
    ("guides", "الأدلة"),
    ("quickstart", "البدء السريع"),
    ("tutorial", "البرنامج التعليمي"),
    ("documentation", "المستندات"),
    ("docs", "المستندات"),
    ("question", "سؤال"),
    ("questions", "الأسئلة"),
    ("answer", "الإجابة"),
    ("time", "الوقت"),
    ("date", "التاريخ"),
    ("day", "اليوم"),
    ("days", "الأيام"),
    ("hour", "الساعة"),
    ("hours", "الساعات"),
    ("number", "الرقم"),
    ("size", "الحجم"),
    ("level", "المستوى"),
    ("part", "الجزء"),
    ("set", "تعيين"),
    ("setup", "الإعداد"),
    ("default branch", "الفرع الافتراضي"),
    ("main", "الرئيسي"),
    ("line", "السطر"),
    ("lines", "الأسطر"),
    ("path", "المسار"),
    ("directory", "الدليل"),
    ("folder", "المجلد"),
    ("repository", "المستودع"),
    ("repositories", "المستودعات"),
    ("code", "الكود"),
    ("command", "الأمر"),
    ("commands", "الأوامر"),
    ("output", "المخرجات"),
    ("input", "المدخلات"),
    ("log", "السجل"),
    ("logs", "السجلات"),
    ("debug", "تصحيح الأخطاء"),
    ("monitor", "مراقبة"),
    ("track", "تتبع"),
    ("automate", "أتمتة"),
    ("automation", "الأتمتة"),
    ("automatically", "تلقائيًا"),
    ("manually", "يدويًا"),
    ("quickly", "بسرعة"),
    ("easily", "بسهولة"),
    ("securely", "بشكل آمن"),
    ("successfully", "بنجاح"),
    ("fully", "بالكامل"),
    ("typically", "عادةً"),
    ("usually", "عادةً"),
    ("currently", "حاليًا"),
    ("recommended", "موصى به"),
    ("recommend", "نوصي"),
    ("possible", "ممكن"),
    ("able", "قادر"),
    ("unable", "غير قادر"),
    ("free", "مجاني"),
    ("paid", "مدفوع"),
];
