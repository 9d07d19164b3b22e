use super::condition::Condition;
use super::{Candidate, RecommendationRule, Resource};

const EXISTING_PROJECT_EQUITY: &str = "Si el proyecto implica la adaptación o ampliación de una iniciativa existente, es fundamental garantizar el principio de equidad y prevenir cualquier forma de discriminación. Para lograrlo, las soluciones basadas en algoritmos o inteligencia artificial (IA) deben diseñarse y aplicarse teniendo en cuenta el contexto local. Esto implica realizar ajustes específicos que consideren las particularidades sociales, económicas y culturales de la región. Además, es esencial respetar y promover el multilingüismo y la diversidad cultural, asegurando que las herramientas sean inclusivas y accesibles para todas las personas, independientemente de su idioma o identidad cultural. Así debe verificarse la adaptación al contexto local, puesto si un modelo entrenado en datos de un país con características demográficas y culturales específicas puede no ser efectivo o incluso ser perjudicial si se utiliza en un contexto diferente.  La falta de sensibilidad cultural o lingüística en soluciones tecnológicas puede conducir a exclusiones involuntarias. Por ejemplo, un sistema que no soporte idiomas locales o dialectos puede marginar a comunidades enteras, limitando su acceso a servicios.";

const PROBLEM_DEFINITION: &str = "La definición del problema de política pública que se busca resolver es un paso crucial, no solo en proyectos de inteligencia artificial (IA), sino en el ciclo completo de diseño y ejecución de políticas públicas. Es fundamental identificar un problema prioritario al que la entidad debe responder y evaluar cómo una herramienta basada en IA puede aportar un valor agregado significativo.";

const SOCIAL_LICENSE: &str = "Sin una gestión adecuada de los stakeholders (actores clave incluida las comunidades), diversos temas de intenso debate pueden surgir y amenazar la viabilidad del proyecto, pudiendo generarse resistencia y desconfianza. Como mitigación, asegurar la participación de ciudadanos que pudieran verse impactados es clave para obtener y ,mantener un intangible denominado licencia social. La Licencia social es la aceptación, por parte de las personas de la introducción y el uso de herramientas de IA en sistemas de toma de decisiones o de soporte a la decisión. Cumplir únicamente con los marcos legales no es suficiente; es necesario dar un paso adicional para obtener la aceptación social, especialmente en lo que respecta a los posibles efectos adversos que la IA pueda tener en las personas. Esto incluye preocupaciones sobre la opacidad en la toma de decisiones, la falta de intervención humana y otros factores que puedan generar desconfianza, incluso cuando la institución pública tiene las facultades legales indiscutibles para actuar sobre un problema.";

const ETHICS_OVERSIGHT: &str = "Es recomendable considerar la incorporación de una figura de responsable independiente de ética de la IA o algún otro mecanismo especializado que supervise las actividades relacionadas con la evaluación del impacto ético, las auditorías y el seguimiento continuo de los sistemas de IA. Esta función garantizaría que los sistemas de IA operen bajo los principios éticos establecidos y que se mantenga un enfoque coherente con los valores fundamentales, como la transparencia, la equidad y la justicia. La supervisión ética también debe incluir la capacidad de intervenir en caso de detectar sesgos, fallos o impactos negativos en los derechos de las personas.";

const MULTIDISCIPLINARY_TEAM: &str = "Los proyectos de inteligencia artificial requieren ser desarrollados no solo por profesionales técnicos capacitados,  si no además en colaboración de diversos profesionales dentro de la misma entidad pública. Es crucial la participación de los responsables de la gestión de los datos, los involucrados en el proceso de negocio donde se inserta la solución, los encargados de  infraestructura tecnológica (TI), los expertos en análisis de datos, asesores legales, y profesionales del área de comunicaciones. Esta colaboración interdisciplinaria no solo asegura una implementación efectiva de la IA, sino que también fortalece la capacidad de la institución para abordar los desafíos éticos, legales y sociales que pueden surgir a lo largo del proyecto. Es importante destacar que los sistemas de IA son inherentemente sociotécnicos, lo que significa que no solo involucran aspectos tecnológicos, sino también dinámicas sociales, organizacionales y culturales. Por lo tanto, la implementación de IA debe tener en cuenta las interacciones entre las personas, las instituciones y las tecnologías, asegurando que las soluciones no solo sean técnicamente viables, sino también socialmente responsables y adaptadas al contexto.";

const PERSONAL_DATA_LAW: &str = "De acuerdo a lo indicado en su respuesta, existiendo uso de datos personales aplica la normativa de protección de datos general o particular que rija la actividad. Esto implica verificar que se cumplan las condiciones de licitud del tratamiento de los datos, los deberes de transparencia proporcionando información adecuada a los usuarios sobre cómo se utilizan sus datos. Además, es fundamental establecer procedimientos claros y accesibles para el ejercicio de los derechos relacionados con la protección de datos, como el derecho de acceso, rectificación, cancelación y oposición. Estas medidas aseguran que el tratamiento de datos se realice de manera conforme a la legislación vigente, protegiendo los derechos fundamentales de los usuarios y promoviendo la confianza en los sistemas de IA.";

const DATA_SUBJECT_RIGHTS: &str = "La normativa de protección de datos exige establecer procedimientos claros y accesibles para el ejercicio de los derechos relacionados con la protección de datos, como el derecho de acceso, rectificación, cancelación y oposición. Verifique la procedencia de cada uno de ellos.";

const NON_DISCRIMINATION_LAW: &str = "La ley 21609 prohíbe las discriminaciones arbitrarias basadas en raza o etnia, la nacionalidad, la situación socioeconómica, el idioma, la ideología u opinión política, la religión o creencia, la sindicación o participación en organizaciones gremiales o la falta de ellas, el sexo, la maternidad, la lactancia materna, el amamantamiento, la orientación sexual, la identidad y expresión de género, el estado civil, la edad, la filiación, la apariencia personal y la enfermedad o discapacidad. Si el sistema utilizará algunas de esas variables para decidir o están presentes en los datos, deben realizarse mediciones que permitan garantizar el cumplimiento legal a través de la protección de estos grupos vulnerables. Estas categorías protegidas que deberán entonces ser consideradas en las evaluaciones sobre sesgo algorítmico, las cuales deben permitir comparar los resultados del sistema respecto de distintos subgrupos de la población, considerando las categorías protegidas, buscando que los resultados no difieran entre ellos. Para realizar lo anterior el equipo deberá seleccionar  las dimensiones importantes en las cuales la muestra de datos pueda generar diferencias entre los distintos subgrupos. Se recomienda utilizar literatura relacionada con el tema y  consultar información de expertos.";

const SAMPLE_REPRESENTATIVENESS: &str = "Conviene analizar los datos frente a dimensiones importantes en las cuales la muestra de datos puede ser diferente a la población donde se desempeñará, en particular la existencia de sesgos de selección no medidos. Es posible que sean necesarias pruebas a efectos de comprobar que cuando se aplique el sistema su desempeño sea el optimo, y que los valores predictivos sean diferentes dependiendo los grupos sobre los que se aplica. Se proponen dos analisis 1) Cualitativo) ¿Se han analizado las posibles diferencias entre la base de datos y la población para la que se está desarrollando el sistema de IA? y 2) Cuantitativo: Aunque los modelos pueden construirse con diversas fuentes de datos, diseñadas o naturales, lo ideal es que la validación se realice con una muestra que permita la inferencia estadística a la población. La muestra de validación debe cubrir adecuadamente la población objetivo y las subpoblaciones de interés.";

const DECISION_TRANSPARENCY: &str = "Se recomienda comunicar de manera clara y transparente cómo se toman las decisiones en el sistema, especificando si el modelo actúa como un sistema autónomo de toma de decisiones o como una herramienta de apoyo para la toma de decisiones humanas. Además, es imprescindible realizar monitoreos periódicos de la herramienta para evaluar su desempeño, identificar posibles sesgos o errores, y garantizar que continúa cumpliendo con los objetivos establecidos, los estándares éticos y las normativas aplicables.";

const DEVELOPMENT_ACCOUNTABILITY: &str = "Es recomendable que el director del proyecto, sea responsable de  documentar, junto con el equipo técnico, todo el proceso de desarrollo para poder justificar frente a la ciudadanía y otras partes interesadas las decisiones tomadas a lo largo de todo el ciclo de vida de la IA.";

const IDB_PROJECT_MANUAL: Resource = Resource {
    label: "Uso responsable de IA para política pública: manual de formulación de proyectos",
    url: "https://publications.iadb.org/es/uso-responsable-de-ia-para-politica-publica-manual-de-formulacion-de-proyectos",
};

pub(super) fn standard_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            question_id: "q4",
            candidates: Vec::new(),
        },
        RecommendationRule {
            question_id: "q5",
            candidates: vec![
                Candidate {
                    text: EXISTING_PROJECT_EQUITY,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q6",
            candidates: vec![
                Candidate {
                    text: EXISTING_PROJECT_EQUITY,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q7",
            candidates: vec![
                Candidate {
                    text: PROBLEM_DEFINITION,
                    condition: Condition::IsFalse,
                    resource: Some(IDB_PROJECT_MANUAL),
                },
            ],
        },
        RecommendationRule {
            question_id: "q8",
            candidates: vec![
                Candidate {
                    text: PROBLEM_DEFINITION,
                    condition: Condition::IsFalse,
                    resource: Some(IDB_PROJECT_MANUAL),
                },
            ],
        },
        RecommendationRule {
            question_id: "q9",
            candidates: Vec::new(),
        },
        RecommendationRule {
            question_id: "q10",
            candidates: vec![
                Candidate {
                    text: "Una práctica altamente recomendada es analizar experiencias comparables de implementación de herramientas similares en otras instituciones o países. Este enfoque proporciona valiosa información sobre los retos y desafíos enfrentados, lo que no solo permite anticipar posibles obstáculos, sino también identificar estrategias exitosas que puedan ser adaptadas al nuevo contexto. Además, este análisis contribuye de manera significativa a evaluar la factibilidad del proyecto, al ofrecer perspectivas reales sobre los recursos, tiempos y capacidades necesarias para su ejecución.",
                    condition: Condition::IsFalse,
                    resource: Some(IDB_PROJECT_MANUAL),
                },
            ],
        },
        RecommendationRule {
            question_id: "q11",
            candidates: vec![
                Candidate {
                    text: "El sistema de IA seleccionado debe ser adecuado al contexto específico y fundamentarse en principios científicos rigurosos. En aquellos casos donde las decisiones puedan tener un impacto irreversible, sean difíciles de revertir o involucren aspectos críticos como decisiones de vida o muerte, es imprescindible que la decisión final sea adoptada, o al menos revisada, por un ser humano. Este enfoque garantiza  que ciertas decisiones o funciones críticas permanezcan bajo el control humano, incluso cuando se utilizan sistemas de IA avanzados. Este concepto está estrechamente relacionado con la necesidad de preservar la supervisión humana en situaciones donde las decisiones pueden tener un impacto significativo o irreversible en la vida de las personas.",
                    condition: Condition::IsFalse,
                    resource: Some(Resource {
                        label: "Recomendación sobre la ética de la inteligencia artificial | UNESCO",
                        url: "https://www.unesco.org/es/articles/recomendacion-sobre-la-etica-de-la-inteligencia-artificial",
                    }),
                },
            ],
        },
        RecommendationRule {
            question_id: "q12",
            candidates: vec![
                Candidate {
                    text: "Si el uso de algoritmos o IA el proyecto, puede tener un impacto en los derechos de las personas, es fundamental garantizar que su implementación sea adecuada al contexto y proporcional al objetivo legítimo que se busca alcanzar. El sistema elegido debe ser cuidadosamente diseñado y evaluado para evitar vulneraciones o tensiones innecesarias con los derechos fundamentales. Para ello, es esencial realizar una evaluación contextual previa que permita identificar y gestionar posibles riesgos, asegurando que las soluciones tecnológicas respeten y se alineen con los derechos de las personas maximizando asi los beneficios.",
                    condition: Condition::IsTrue,
                    resource: Some(Resource {
                        label: "Evaluacion de impacto en DDHH",
                        url: "",
                    }),
                },
            ],
        },
        RecommendationRule {
            question_id: "q13",
            candidates: vec![
                Candidate {
                    text: "En la implementación de sistemas de IA o algoritmos destinados a responder o ejecutar un mandato legal o reglamentario que implique el tratamiento de datos personales, la base de licitud no es el consentimiento, sino la ley o normativa que sustenta dicho tratamiento. Sin embargo, esto no exime a los responsables de garantizar el cumplimiento de las salvaguardas necesarias para proteger los derechos de las personas. Deben implementarse medidas que aseguren la transparencia en las decisiones automatizadas, el acceso a los datos relevantes por parte de los interesados y el cumplimiento estricto de los requisitos establecidos en las normativas de protección de datos. La ejecución de un mandato legal no elimina las obligaciones relacionadas con la protección de la privacidad y la seguridad de los datos personales, que deben ser tratadas con el máximo rigor ético y legal.",
                    condition: Condition::IsTrue,
                    resource: Some(Resource {
                        label: "Ley 19628, 8 bis y 20.",
                        url: "https://www.bcn.cl/leychile/navegar?idNorma=1195453",
                    }),
                },
            ],
        },
        RecommendationRule {
            question_id: "q14",
            candidates: vec![
                Candidate {
                    text: "Las instituciones públicas deben operar siempre dentro de un marco legal claramente definido, en cumplimiento del principio de competencias y legalidad. Esto implica no solo actuar en el ámbito de las facultades conferidas por la ley, sino también garantizar que cualquier uso de datos personales o sensibles esté respaldado por una normativa habilitante específica. Para una adecuada rendición de cuentas, es fundamental identificar no solo la normativa que autoriza el uso de datos, sino también las condiciones particulares establecidas, ya sea en la legislación orgánica de la institución o en las normativas específicas que regulen la actividad en cuestión. Este enfoque asegura que las instituciones actúen de manera transparente y responsable.",
                    condition: Condition::IsFalse,
                    resource: Some(Resource {
                        label: "Guía formulación ética de proyectos de ciencia de datos",
                        url: "https://digital.gob.cl/transformacion-digital/estandares-y-guias/guia-formulacion-etica-de-proyectos-de-ciencia-de-datos/",
                    }),
                },
            ],
        },
        RecommendationRule {
            question_id: "q15",
            candidates: vec![
                Candidate {
                    text: SOCIAL_LICENSE,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q16",
            candidates: vec![
                Candidate {
                    text: SOCIAL_LICENSE,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q17",
            candidates: vec![
                Candidate {
                    text: SOCIAL_LICENSE,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q18",
            candidates: vec![
                Candidate {
                    text: SOCIAL_LICENSE,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q19",
            candidates: vec![
                Candidate {
                    text: ETHICS_OVERSIGHT,
                    condition: Condition::IsFalse,
                    resource: None,
                },
                Candidate {
                    text: ETHICS_OVERSIGHT,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q20",
            candidates: vec![
                Candidate {
                    text: "Se debe fomentar activamente la participación y el compromiso de audiencias diversas en todas las etapas del ciclo de vida de los sistemas de IA, con el objetivo de lograr una representación equilibrada y equitativa de géneros y comunidades. Esto no solo contribuye a la inclusión y la diversidad, sino que también garantiza que los sistemas de IA sean diseñados y evaluados con una perspectiva amplia, reflejando las necesidades y realidades de todos los grupos sociales. La diversidad en los equipos de desarrollo es clave para mitigar sesgos y promover soluciones tecnológicas justas, éticas y accesibles para todas las personas.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q21",
            candidates: vec![
                Candidate {
                    text: "Es fundamental que se documente adecuadamente cada una de las decisiones tomadas durante el desarrollo de los sistemas de IA, especialmente cuando se procesan datos personales. Esta documentación debe ser clara y accesible para garantizar el cumplimiento de las obligaciones de transparencia establecidas por las normativas de protección de datos. La transparencia implica no solo informar sobre los criterios y procesos que guían las decisiones automatizadas, sino también permitir a los usuarios entender cómo se recopilan, procesan y utilizan sus datos. Además, se recomienda implementar fichas de transparencia. La ficha de transparencia es un documento que proporciona información relevante sobre la naturaleza, aspectos técnicos, funcionales y del proyecto del SDA. Desempeña un papel fundamental en la promoción de la transparencia, la rendición de cuentas y el uso ético de los algoritmos. La herramienta facilita la creación de esta ficha: ayuda a la identificación de la información relevante sobre el SDA que se debe transparentar y la presenta de manera clara, visible y comprensible tanto para los involucrados en el proceso institucional como para cualquier persona interesada.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q22",
            candidates: vec![
                Candidate {
                    text: MULTIDISCIPLINARY_TEAM,
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: MULTIDISCIPLINARY_TEAM,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q23",
            candidates: vec![
                Candidate {
                    text: MULTIDISCIPLINARY_TEAM,
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: MULTIDISCIPLINARY_TEAM,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q24",
            candidates: vec![
                Candidate {
                    text: PERSONAL_DATA_LAW,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q25",
            candidates: vec![
                Candidate {
                    text: PERSONAL_DATA_LAW,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q26",
            candidates: vec![
                Candidate {
                    text: "Si su sistema va a utilizar datos personales, es fundamental verificar y establecer un procedimiento claro para el ejercicio de los derechos ARCO (Acceso, Rectificación, Cancelación y Oposición). Esto significa implementar mecanismos accesibles y permanentemente disponibles para que los usuarios puedan ejercer estos derechos de manera efectiva. El procedimiento debe incluir detalles sobre cómo los usuarios pueden solicitar acceso a sus datos, corregir información inexacta, solicitar la eliminación de datos o expresar oposición al tratamiento de sus datos personales.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q27",
            candidates: vec![
                Candidate {
                    text: "En la hipótesis de recogida de datos por sensores automatizados, fortalecer los deberes de información y transparencia se vuelve una cuestión critica. Diseñe mecanismos para disponibilizar  información clara y accesible sobre el tipo de datos que se están recopilando, el propósito de la recopilación, la base legal que justifica el tratamiento y los posibles destinatarios de los datos. Si no es posible entregar esta información en el momento de la recolección, asegure que esta información esté disponible en algún sitio web que informe sobre el proyecto o sistema implementado. Además, se deben establecer mecanismos para que los usuarios puedan ejercer sus derechos de forma sencilla, como el acceso, la rectificación o la eliminación de sus datos si fuera procedente.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q28",
            candidates: vec![
                Candidate {
                    text: "Cuando los datos personales provengan de entidades externas para enriquecer los datos de la entidad, es fundamental verificar las condiciones legales de la cesión o transferencia de éstos, asegurando que se cumplan a lo menos los siguientes requisitos: \n a) Consentimiento o ley habilitante: Confirmar que la cesión de datos se basa en el consentimiento explícito del titular o en una base legal válida que habilite el tratamiento, como una obligación legal o cualquiera de las habilitantes reconocida en la ley, inclusive el interés legítimo.\n b) Contrato escrito: Asegurarse de que exista un contrato escrito que regule la cesión de los datos personales, especificando claramente las responsabilidades y obligaciones de las partes involucradas en cuanto al tratamiento y uso de los datos.\n c) Finalidad de la cesión: Verificar que la cesión de los datos esté claramente justificada por una finalidad específica y legítima, de acuerdo con la normativa de protección de datos, y que dicha finalidad sea compatible con el propósito original para el cual se recogieron los datos.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q29",
            candidates: vec![
                Candidate {
                    text: "En cumplimiento de la normativa de protección de datos, debe realizar una evaluación ex ante sobre la idoneidad de los datos a tratar, mediante un análisis de proporcionalidad que garantice que los datos personales recopilados y procesados se limiten estrictamente a aquellos que sean necesarios, adecuados y pertinentes para los fines específicos del tratamiento. Este análisis se realiza en cumplimiento del principio de minimización de datos, que exige que no se utilicen más datos de los imprescindibles para alcanzar el propósito establecido. Además, debe justificarse que la cantidad, la naturaleza y la duración del tratamiento de los datos estén alineadas con el objetivo legítimo perseguido, minimizando así los riesgos para la privacidad y los derechos de los individuos. ",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q30",
            candidates: vec![
                Candidate {
                    text: "Recomendamos evaluar la necesidad de contar con datos personales identificados para el entrenamiento y prueba. La ley exige al responsable y al encargado del tratamiento aplicar las medidas técnicas y organizativas apropiadas para garantizar un nivel de seguridad adecuado al riesgo, que en su caso incluya, entre otros, la seudonimización y el cifrado de datos personales; Recomendamos evaluar si es posible tratar los datos de forma agregada o anonimizada, limitando el uso de datos identificables solo a lo estrictamente necesario para cumplir con los fines legítimos del tratamiento. Estas medidas son esenciales para prevenir accesos no autorizados, pérdida de datos o cualquier otro riesgo que pueda comprometer la privacidad de los individuos.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q31",
            candidates: vec![
                Candidate {
                    text: "De acuerdo al caso de uso señalado, procede realizar una evaluación de impacto en protección de datos personales (EIPD).  La EIPD es una metodologia para evaluar, identificar y mitigar los riesgos potenciales asociados al tratamiento de los datos, asegurando que se respeten los derechos de los individuos y se cumpla con las normativas de protección de datos vigentes. La EIPD debe analizar la naturaleza, el alcance, el contexto y los fines del tratamiento, así como las posibles consecuencias sobre la privacidad y la seguridad de los datos personales. Además, debe incluir medidas de mitigación de riesgos, como la implementación de técnicas de seudonimización, cifrado, y otras medidas de seguridad apropiadas, con el fin de garantizar que los datos sean tratados de manera legal y segura.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q32",
            candidates: vec![
                Candidate {
                    text: DATA_SUBJECT_RIGHTS,
                    condition: Condition::OneOf(&["Si, pero parcialmente", "No"]),
                    resource: None,
                },
                Candidate {
                    text: DATA_SUBJECT_RIGHTS,
                    condition: Condition::Equals("Si, pero parcialmente"),
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q33",
            candidates: vec![
                Candidate {
                    text: "En estos casos deben garantizarse niveles de información suficientes relacionados con la existencia de decisiones automatizadas, información significativa sobre la lógica aplicada al tratamiento, así como las consecuencias previstas de dicho tratamiento para el titular, garantizando niveles de explicación suficientes respectos de la consecuencias probables del tratamiento de datos",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q34",
            candidates: vec![
                Candidate {
                    text: "Evaluar el uso de herramientas que permitan transparentar factores o elementos que tome en cuenta el algoritmo para llegar al resultado. El sector público está sujeto a normativas de transparencia en la función publica reforzadas por mandatos de la ley de datos personales frente a la toma de decisiones automatizadas. Una herramienta adecuada es la a ficha de transparencia es un documento que proporciona información relevante sobre la naturaleza, aspectos técnicos, funcionales y del proyecto del SDA. Desempeña un papel fundamental en la promoción de la transparencia, la rendición de cuentas y el uso ético de los algoritmos. La herramienta facilita la creación de esta ficha: ayuda a la identificación de la información relevante sobre el SDA que se debe transparentar y la presenta de manera clara, visible y comprensible tanto para los involucrados en el proceso institucional como para cualquier persona interesada.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q35",
            candidates: vec![
                Candidate {
                    text: "De acuerdo a sus respuestas la entidad está calificada como servicio escencial debiendo cumplir los estándares dictados por la ANCI para los servicios esenciales. ",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q36",
            candidates: vec![
                Candidate {
                    text: "De acuerdo a sus respuesta, la entidad podria estar calificada como operador de importancia vital lo que la obliga a cumplir los requisitos de ciberseguridad de la ley 21663 en particular el articulo 8°",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q37",
            candidates: vec![
                Candidate {
                    text: "Si se trata de un sistema que será desarrollado por un tercero subcontratado, deben incluirse clausulas que obliguen al tercero  a observar su politica. ",
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: "La ciberseguridad debe ser una consideración fundamental en el diseño, desarrollo, implementación y operación de todos los sistemas de IA. Al implementar medidas de ciberseguridad adecuadas, las organizaciones pueden ayudar a proteger sus sistemas de IA contra amenazas y reducir el riesgo de daños potenciales. las ciberamenazas a los sistemas de IA pueden tener graves consecuencias, como: Pérdida de datos confidenciales o sensibles, interrupción o inhabilitación de sistemas de IA críticos, manipulación de datos o algoritmos de IA para producir resultados incorrectos o dañinos. Si se trata de un sistema que será desarrollado por un tercero subcontratado, deben incluirse clausulas que obliguen al tercero a observar su politica. ",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q37.1",
            candidates: vec![
                Candidate {
                    text: "Si el sistema será desarrollado por un tercero subcontratado, es fundamental incluir cláusulas contractuales que obliguen al proveedor a cumplir con las políticas de seguridad establecidas por la entidad responsable del tratamiento de los datos. Estas cláusulas deben especificar claramente las obligaciones del tercero en cuanto a la protección de datos personales, incluyendo la implementación de medidas de seguridad adecuadas, la notificación inmediata de cualquier incidente de seguridad, y la obligación de garantizar la confidencialidad y el acceso restringido a la información. Además, se deben prever auditorías regulares y revisiones de cumplimiento para asegurar que el tercero mantenga un nivel de seguridad adecuado durante todo el ciclo de vida del proyecto.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q38",
            candidates: vec![
                Candidate {
                    text: "La implementación de un Sistema de Gestión de Seguridad de la Información (SGSI) permite hacer un monitoreo adecuado de los riesgos de seguridad en la organización, incluido en el uso de los sistemas de IA. Dado que estos manejan grandes volúmenes de datos y pueden ser utilizados en la toma decisiones automatizadas con un impacto significativo, es esencial contar con un marco sólido que asegure la confidencialidad, integridad,  disponibilidad y resiliencia de la información, así como la protección de los derechos de los usuarios. \nUn SGSI bien estructurado ayuda a identificar y mitigar riesgos de seguridad, garantizando que los algoritmos de IA no solo sean robustos, sino también seguros frente a amenazas cibernéticas. Asimismo, un SGSI proporciona un enfoque sistemático para la gestión de incidentes de seguridad, asegurando que cualquier vulnerabilidad o brecha en la seguridad sea identificada rápidamente y abordada de manera eficaz. Esto es fundamental en proyectos de IA, donde la rapidez en la detección y respuesta a incidentes puede prevenir daños mayores y proteger tanto a las organizaciones como a los usuarios. \nPor lo tanto, integrar un SGSI en el ciclo de vida del desarrollo de proyectos de IA es una práctica recomendada para garantizar la seguridad, fiabilidad y sostenibilidad a largo plazo de estas tecnologías innovadoras.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q39",
            candidates: vec![
                Candidate {
                    text: "Los sistemas de IA son activos cibernéticos dentro de una infraestructura de TIC. Cada uno de sus componentes fuentes de datos, datos, algoritmos, modelos de entrenamiento, procesos de implementación/gestión de datos/pruebas.Estos componentes  pertenecen a las capas de una infraestructura de TIC de la organización. Dado que los sistemas de IA son parte de la infraestructura de las TIC, no solo se deben aplicar prácticas de ciberseguridad específicas de la IA, sino también aquellas que protejan las TIC que abarcan los elementos de la IA. Un buen enfoque para abordar la especificidad de la ciberseguridad por 'capas' es la guia de ENISA, que ofrece un cuestionario de evaluación de preparación en este sentido.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q39.1",
            candidates: vec![
                Candidate {
                    text: "Los sistemas algorítmicos y de IA presentan riesgos específicos de ciberseguridad que debieran abordarse, más allá de los controles tradicionales. Recomendamos revisar está tipología de riesgos y verificar que el análisis, la política y los planes de acción incorporen mecanismos de prevención de estas acciones de acuerdo al proyecto específico.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q40",
            candidates: vec![
                Candidate {
                    text: NON_DISCRIMINATION_LAW,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q41",
            candidates: vec![
                Candidate {
                    text: NON_DISCRIMINATION_LAW,
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: NON_DISCRIMINATION_LAW,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q42",
            candidates: vec![
                Candidate {
                    text: SAMPLE_REPRESENTATIVENESS,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q43",
            candidates: vec![
                Candidate {
                    text: SAMPLE_REPRESENTATIVENESS,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q44",
            candidates: vec![
                Candidate {
                    text: "Utilice para el analisis exploratorio un Perfil de datos. Este perfil es un análisis exploratorio inicial durante la fase de Recolección y procesamiento de datos del ciclo de vida de IA. Brinda información para evaluar la calidad, integridad, temporalidad, consistencia y posibles sesgos, daños potenciales e implicaciones de su uso. En este analisis es posible que descubra que será necesario imputar valores faltantes en los datos. Es importante documentar el porqué no se tienen esa información, si los dataos faltantes están asociados a la variable a predecir.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: "Es recomendable realizar un analisis exploratorio de los datos para ayudar a evaluar los problemas con estos  y documentar las características de un sistema de IA, las suposiciones realizadas y las medidas de mitigación de riesgos aplicadas a lo largo del ciclo de vida. Puede elaborar un  Perfil de datos. Este perfil es un análisis exploratorio inicial durante la fase de Recolección y procesamiento de datos del ciclo de vida de IA. Brinda información para evaluar la calidad, integridad, temporalidad, consistencia y posibles sesgos, daños potenciales e implicaciones de su uso. ",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q45",
            candidates: vec![
                Candidate {
                    text: "Si un sistema algorítmico opera dentro de la administración del Estado, se sujetará a las normas administrativas y de derecho público correspondiente. Esto implica que siendo parte un proceso administrativo su despliegue y funcionamiento están sujetos a las normas administrativas de transparencia. ",
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: "Si al algoritmo no opera dentro de algun proceso administrativo, aplican minimos de transparencia, relacionados con el hecho de estar interactuando con un sistema de IA.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q46",
            candidates: vec![
                Candidate {
                    text: "Es fundamental que los algoritmos utilizados en áreas de alto impacto como la educación, el empleo, los servicios básicos, los subsidios y la ayuda económica, la capacitación laboral, la salud, la seguridad pública, la vivienda, la protección social, y los procesos administrativos como autorizaciones o permisos, sean transparentes y comprensibles. La opacidad de estos algoritmos puede generar desconfianza, reforzar sesgos injustos y perpetuar desigualdades, afectando de manera directa la vida de las personas. La transparencia en el diseño y la toma de decisiones algorítmica permite que los ciudadanos comprendan cómo se les asignan recursos, beneficios o servicios, y asegura que los sistemas sean justos, éticos y responsables. Además, garantiza que los procesos sean auditables y que se puedan corregir posibles errores o sesgos, promoviendo una mayor equidad y evitando la discriminación en áreas clave para el bienestar social. La Recomendación de Transparencia Algoritmica del Consejo para la Transprencia señala vias para fomentar la información en este caso de algoritmos.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q47",
            candidates: vec![
                Candidate {
                    text: "Se recomienda aplicar minimos de transparencia e información relacionados con el hecho de estar interactuando con un sistema de IA.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q48",
            candidates: vec![
                Candidate {
                    text: "Evaluar herramientas que permitan transparentar factores o elementos que tome en cuenta el algoritmo para llegar al resultado. El sector público está sujeto a normativas de transparencia en la función publica reforzadas por mandatos de la ley de datos personales frente a la toma de decisiones automatizadas. Es recomendable desarrollar una ficha de transparencia, documento que proporciona información relevante sobre la naturaleza, aspectos técnicos, funcionales y del proyecto del SDA. Desempeña un papel fundamental en la promoción de la transparencia, la rendición de cuentas y el uso ético de los algoritmos. La herramienta facilita la creación de esta ficha: ayuda a la identificación de la información relevante sobre el SDA que se debe transparentar y la presenta de manera clara, visible y comprensible tanto para los involucrados en el proceso institucional como para cualquier persona interesada.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q49",
            candidates: vec![
                Candidate {
                    text: "Los sistemas pueden estar protegidos por derechos de propiedad intelectual, sin embargo,  el Estado actua bajo una obligación de transparencia debiendo justificar el resultado de sus decisiones. Asegure la implementación de mecanismos que permitan comprender como un sistema llega a sus resultados, y que a lo menos pueda responder las solicitudes relacionadas con la normativa de datos personales, relacionadas con los deberes de transparencia contenidas en el articulo 14 ter, o solictudes de acceso a la información pública que podrian ser requeridas en este punto.",
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: "Si fuera procedente por disposiciones contractuales, debe garantizarse  la entrega adecuada y transparente del código fuente del sistema. Se aconseja especialmente acordar su entrega cuando el sistema impacte áreas sensibles como la salud, la seguridad pública o los servicios financieros. La entrega del código fuente no solo facilita la auditoría y revisión externa de los algoritmos, sino que también promueve la transparencia, la reproducibilidad de resultados y la posibilidad de detectar y corregir posibles sesgos o vulnerabilidades. Al entregar el código fuente, se debe asegurar que esté debidamente documentado. En el caso que no sea posible exigirlo, la entidad deberá exigir al proveedor niveles adecuados de transparencia que le permita cumplir sus obligaciones legales.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q50",
            candidates: vec![
                Candidate {
                    text: "Considere incluir la entrega del código fuente en los términos del contrato con el tercero desarrollador",
                    condition: Condition::IsFalse,
                    resource: None,
                },
                Candidate {
                    text: "Asegúrese de que el acuerdo de entrega del código fuente incluya documentación adecuada",
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: "Evalúe si la entrega del código fuente es aplicable o necesaria para este proyecto",
                    condition: Condition::IsNotApplicable,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q51",
            candidates: vec![
                Candidate {
                    text: "Se recomienda establecer mecanismos que permitan que la ciudadanía tenga una oportunidad de réplica y, de ser necesario, de impugnar el uso de un determinado sistema o los lineamientos empleados para su desarrollo por parte de un organismo público. El uso incorrecto de los sistemas podría conllevar desde un aprovechamiento no óptimo de los recursos, hasta el desencadenamiento de casos de vulneración de derechos de los ciudadanos. Los riesgos y daños potenciales son variados y a menudo difíciles de anticipar. Los hay fundamentalmente de dos tipos: riesgos de inclusión (por ej. asignación de recursos o beneficios a quienes no corresponde) y de exclusión (por ej privación de recursos o beneficios a personas que sí los necesitan).",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q52",
            candidates: Vec::new(),
        },
        RecommendationRule {
            question_id: "q53",
            candidates: vec![
                Candidate {
                    text: DECISION_TRANSPARENCY,
                    condition: Condition::IsTrue,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q54",
            candidates: vec![
                Candidate {
                    text: DECISION_TRANSPARENCY,
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: DECISION_TRANSPARENCY,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q55",
            candidates: vec![
                Candidate {
                    text: "Dentro del ambito de la comunicación clara sobre el despliegue de un sistema algoritmico, será importante comunicar claramente cómo se toman las decisiones y si el modelo es un sistema de toma o de soporte de decisión. Es relevante también contar con sistemas de información directa hacia aquellas personas o instituciones que se podrían ver afectadas por la implementación del modelo. Existen obligaciones legales en la administración pública como la transparencia y publicidad administrativa y participación ciudadana en la gestión pública, a los que están sujetos los sistemas de decisión automatizadas, por lo que corresponde que las instituciones comuniquen las implicancias de la nueva herramienta a la ciudadanía, que reciban retroalimentación y hagan las modificaciones necesarias para entregar mayor transparencia en la herramienta. ",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q56",
            candidates: vec![
                Candidate {
                    text: "Una auditoría algorítmica es un estudio que busca evaluar el funcionamiento de un sistema algorítmico, durante su despliegue, considerando aspectos de diseño, datos, impactos en materia de precisión, privacidad y seguridad, entre otros. Estas pueden realizarse a manera de medición frente a ciertos estándares (auditorías de rendimiento), o bien como un análisis de cumplimiento de normas particulares (auditorías de cumplimiento). Su importancia radica en que los sistemas  pueden precisar fallas o riesgos que no se detectan a primera vista o cuya relevancia se descuida debido a la frecuencia con que se realizan ciertos procesos. Mientras más complejos sean los sistemas, existen mayores probabilidades de que se presenten errores. La auditoría es un mecanismo de control y revisión que poder realizado por un profesional  interno como externo y su importancia es que permite verificar que se cumplan  los siguientes propósitos : 1) rendir cuenta sobre el uso de los sistemas algorítmicos 2) Fortalecer la capacidad interna de los organismos públicos de evaluar los sistemas que construyen o adquieren, y facilitar que obtengan una mayor experiencia anticipándose a impactos indeseados. 3) son un mecanismo de responsabilidad en el uso de algoritmos, mediante un mecanismo útil y continuo para que terceros revisen y evalúen estos sistemas, de modo que sea posible identificar problemas y resolverlos o mitigarlos.  Planificar auditorías algorítmicas es esencial para garantizar el cumplimiento de estándares, regulaciones o de lo planificado o esperable del sistema. Las auditorias permiten revisar la fiabilidad de los sistemas de inteligencia artificial (IA), identificar sesgos en los datos, errores en los modelos y posibles impactos negativos en los usuarios, asegurando que las decisiones tomadas por los algoritmos sean éticas y justas. También son una herramienta clave para evaluar la sostenibilidad del modelo a largo plazo, facilitando su mejora continua y minimizando riesgos legales, reputacionales o de seguridad. Incorporar auditorías algorítmicas regulares desde la planificación inicial de un proyecto garantiza un enfoque preventivo, en lugar de reactivo, lo que resulta en sistemas más responsables y alineados con los valores organizacionales y sociales.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q57",
            candidates: vec![
                Candidate {
                    text: "Destinar un presupuesto específico para auditorías algorítmicas es esencial para su ejecución. Estas auditorías requieren recursos especializados, como equipos multidisciplinarios, herramientas de análisis y tiempo para evaluar exhaustivamente los modelos, los datos utilizados y los resultados generados. Sin un presupuesto adecuado, las auditorías pueden ser superficiales o postergadas, lo que aumenta el riesgo de que los sistemas presenten sesgos, errores o vulnerabilidades que impacten negativamente a los usuarios y la organización. Además, invertir en auditorías reduce significativamente los riesgos legales, financieros y reputacionales. La planificación presupuestaria para auditorías debe considerarse una inversión estratégica.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q58",
            candidates: vec![
                Candidate {
                    text: "No contemplar un diseño adecuado para atender los requerimientos de información de usuarios externos en sistemas de servicios públicos puede generar múltiples falencias. Entre ellas, destacan la falta de transparencia, que puede provocar desconfianza en el sistema de IA o el uso de algoritmos, y la dificultad para que los usuarios comprendan cómo se toman decisiones que afectan sus vidas, como la asignación de recursos o la priorización de servicios. Además, la ausencia de un mecanismo claro y accesible para responder a estas solicitudes puede resultar en una mayor cantidad de reclamaciones, saturación de otros canales de atención y una percepción negativa sobre la gestión del servicio. También puede representar incumplimientos normativos en casos donde la legislación exige accesibilidad y rendición de cuentas en el manejo de sistemas automatizados.",
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
        RecommendationRule {
            question_id: "q59",
            candidates: vec![
                Candidate {
                    text: DEVELOPMENT_ACCOUNTABILITY,
                    condition: Condition::IsTrue,
                    resource: None,
                },
                Candidate {
                    text: DEVELOPMENT_ACCOUNTABILITY,
                    condition: Condition::IsFalse,
                    resource: None,
                },
            ],
        },
    ]
}
